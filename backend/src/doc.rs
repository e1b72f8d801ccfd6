//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: index and health handlers directly; the CRUD routes of every
//!   resource kind through [`ResourcePaths`], since those handlers are
//!   generic and cannot carry `#[utoipa::path]`
//! - **Schemas**: wrappers from [`crate::inbound::http::schemas`] that keep
//!   domain types free of utoipa
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use std::borrow::Cow;

use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{Array, KnownFormat, ObjectBuilder, Schema, SchemaFormat, Type};
use utoipa::openapi::{ContentBuilder, Ref, RefOr, Required, Response, ResponseBuilder};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::domain::{ArticleFields, CommentFields, ResourceFields, ResourceKind, UserFields};
use crate::inbound::http::error::JSON_API_CONTENT_TYPE;
use crate::inbound::http::index::IndexResponse;
use crate::inbound::http::schemas::{
    ArticleAttributesSchema, ArticleSchema, CommentAttributesSchema, CommentSchema,
    ErrorCodeSchema, ErrorSchema, UserAttributesSchema, UserSchema, ValidationDocumentSchema,
    ValidationErrorSchema, ValidationErrorSourceSchema,
};

/// Schema names documenting one resource kind.
struct DocumentedKind {
    kind: ResourceKind,
    record: Cow<'static, str>,
    attributes: Cow<'static, str>,
}

impl DocumentedKind {
    fn of<F, R, A>() -> Self
    where
        F: ResourceFields,
        R: ToSchema,
        A: ToSchema,
    {
        Self {
            kind: F::KIND,
            record: R::name(),
            attributes: A::name(),
        }
    }

    fn single(&self) -> RefOr<Schema> {
        envelope(self.kind.singular, Ref::from_schema_name(self.record.as_ref()).into())
    }

    fn collection(&self) -> RefOr<Schema> {
        let items = Array::new(Ref::from_schema_name(self.record.as_ref()));
        envelope(self.kind.plural, RefOr::T(Schema::Array(items)))
    }
}

fn envelope(key: &str, value: RefOr<Schema>) -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .property(key, value)
            .required(key)
            .build(),
    ))
}

fn capitalised(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

fn json_response(description: &str, content_type: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(content_type, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(
        description,
        "application/json",
        Ref::from_schema_name(ErrorSchema::name()).into(),
    )
}

fn validation_response() -> Response {
    json_response(
        "Validation failed",
        JSON_API_CONTENT_TYPE,
        Ref::from_schema_name(ValidationDocumentSchema::name()).into(),
    )
}

fn id_parameter(description: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(description))
        .schema(Some(RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Uuid)))
                .build(),
        ))))
        .build()
}

/// Registers the CRUD paths of every resource kind.
struct ResourcePaths;

impl ResourcePaths {
    fn add_kind(openapi: &mut utoipa::openapi::OpenApi, doc: &DocumentedKind) {
        let ResourceKind {
            singular,
            plural,
            title,
        } = doc.kind;
        let collection_path = format!("/{plural}");
        let item_path = format!("/{plural}/{{id}}");
        let body = RequestBodyBuilder::new()
            .required(Some(Required::True))
            .content(
                "application/json",
                ContentBuilder::new()
                    .schema(Some(Ref::from_schema_name(doc.attributes.as_ref())))
                    .build(),
            )
            .build();
        let id_description = format!("{title} identifier");
        let not_found = format!("{title} not found");

        let list = OperationBuilder::new()
            .tag(plural)
            .operation_id(Some(format!("list{}", capitalised(plural))))
            .summary(Some(format!("List every {singular}")))
            .response(
                "200",
                json_response(&capitalised(plural), JSON_API_CONTENT_TYPE, doc.collection()),
            )
            .response("500", error_response("Internal server error"))
            .build();
        openapi
            .paths
            .add_path_operation(&collection_path, vec![HttpMethod::Get], list);

        let create = OperationBuilder::new()
            .tag(plural)
            .operation_id(Some(format!("create{title}")))
            .summary(Some(format!("Create a {singular}")))
            .request_body(Some(body.clone()))
            .response(
                "201",
                json_response(&format!("{title} created"), JSON_API_CONTENT_TYPE, doc.single()),
            )
            .response("400", error_response("Malformed body"))
            .response("422", validation_response())
            .response("500", error_response("Internal server error"))
            .build();
        openapi
            .paths
            .add_path_operation(&collection_path, vec![HttpMethod::Post], create);

        let get = OperationBuilder::new()
            .tag(plural)
            .operation_id(Some(format!("get{title}")))
            .summary(Some(format!("Fetch one {singular}")))
            .parameter(id_parameter(&id_description))
            .response("200", json_response(title, JSON_API_CONTENT_TYPE, doc.single()))
            .response("404", error_response(&not_found))
            .response("500", error_response("Internal server error"))
            .build();
        openapi
            .paths
            .add_path_operation(&item_path, vec![HttpMethod::Get], get);

        let update = OperationBuilder::new()
            .tag(plural)
            .operation_id(Some(format!("update{title}")))
            .summary(Some(format!("Replace every field of a {singular}")))
            .parameter(id_parameter(&id_description))
            .request_body(Some(body))
            .response(
                "200",
                json_response(&format!("{title} updated"), JSON_API_CONTENT_TYPE, doc.single()),
            )
            .response("400", error_response("Malformed body"))
            .response("404", error_response(&not_found))
            .response("422", validation_response())
            .response("500", error_response("Internal server error"))
            .build();
        openapi
            .paths
            .add_path_operation(&item_path, vec![HttpMethod::Put], update);

        let delete = OperationBuilder::new()
            .tag(plural)
            .operation_id(Some(format!("delete{title}")))
            .summary(Some(format!("Delete a {singular}")))
            .parameter(id_parameter(&id_description))
            .response(
                "204",
                ResponseBuilder::new()
                    .description(format!("{title} deleted"))
                    .build(),
            )
            .response("404", error_response(&not_found))
            .response("500", error_response("Internal server error"))
            .build();
        openapi
            .paths
            .add_path_operation(&item_path, vec![HttpMethod::Delete], delete);
    }

    fn add_article_comments(openapi: &mut utoipa::openapi::OpenApi, comments: &DocumentedKind) {
        let operation = OperationBuilder::new()
            .tag(ArticleFields::KIND.plural)
            .operation_id(Some("listArticleComments"))
            .summary(Some("List the comments left on an article"))
            .parameter(id_parameter("Article identifier"))
            .response(
                "200",
                json_response("Comments", JSON_API_CONTENT_TYPE, comments.collection()),
            )
            .response("404", error_response("Article not found"))
            .response("500", error_response("Internal server error"))
            .build();
        openapi.paths.add_path_operation(
            "/articles/{id}/comments",
            vec![HttpMethod::Get],
            operation,
        );
    }
}

impl Modify for ResourcePaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let comments = DocumentedKind::of::<CommentFields, CommentSchema, CommentAttributesSchema>();
        let kinds = [
            DocumentedKind::of::<UserFields, UserSchema, UserAttributesSchema>(),
            DocumentedKind::of::<ArticleFields, ArticleSchema, ArticleAttributesSchema>(),
        ];
        for kind in &kinds {
            Self::add_kind(openapi, kind);
        }
        Self::add_kind(openapi, &comments);
        Self::add_article_comments(openapi, &comments);
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&ResourcePaths),
    info(
        title = "BurzContent API",
        description = "Content management endpoints for users, articles and comments."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        IndexResponse,
        ErrorSchema,
        ErrorCodeSchema,
        ValidationDocumentSchema,
        ValidationErrorSchema,
        ValidationErrorSourceSchema,
        UserSchema,
        UserAttributesSchema,
        ArticleSchema,
        ArticleAttributesSchema,
        CommentSchema,
        CommentAttributesSchema,
    )),
    tags(
        (name = "index", description = "Service greeting"),
        (name = "users", description = "CMS users"),
        (name = "articles", description = "Articles and their comments"),
        (name = "comments", description = "Reader comments"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
