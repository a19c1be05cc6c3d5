use actix_web::{web, Scope};

pub mod code_review;

pub fn create_api_router() -> Scope {
    web::scope("/api").service(code_review_routes())
}

fn code_review_routes() -> Scope {
    web::scope("/code-review").configure(code_review::configure_code_review_routes)
}
