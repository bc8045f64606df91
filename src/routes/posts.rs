use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::types::PostId;
use crate::forms::posts::{CreatePostForm, CreatePostPayload, UpdatePostForm, UpdatePostPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::posts::{
    PostListParams, create_post as create_post_service, delete_post as delete_post_service,
    get_post_by_slug as get_post_by_slug_service, list_posts as list_posts_service,
    list_published_posts as list_published_posts_service, update_post as update_post_service,
};

#[get("/posts")]
pub async fn list_posts(
    params: web::Query<PostListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_posts_service(params.into_inner(), repo.get_ref()) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_response(err),
    }
}

#[get("/posts/published")]
pub async fn list_published_posts(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_published_posts_service(repo.get_ref()) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_response(err),
    }
}

#[get("/posts/{slug}")]
pub async fn get_post_by_slug(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_post_by_slug_service(&slug.into_inner(), repo.get_ref()) {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_response(err),
    }
}

#[post("/posts")]
pub async fn create_post(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreatePostForm>,
) -> impl Responder {
    let payload: CreatePostPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(crate::services::ServiceError::from(e)),
    };

    match create_post_service(payload, repo.get_ref()) {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_response(err),
    }
}

#[post("/posts/{post_id}/update")]
pub async fn update_post(
    post_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdatePostForm>,
) -> impl Responder {
    let post_id = match PostId::new(post_id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e.into()),
    };

    let payload = match UpdatePostPayload::try_from((post_id, form)) {
        Ok(payload) => payload,
        Err(e) => return error_response(crate::services::ServiceError::from(e)),
    };

    match update_post_service(payload, repo.get_ref()) {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_response(err),
    }
}

#[post("/posts/{post_id}/delete")]
pub async fn delete_post(
    post_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_post_service(post_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
