use actix_web::{App, HttpServer, middleware, web};

use inkpost::db::establish_connection_pool;
use inkpost::models::config::ServerConfig;
use inkpost::repository::DieselRepository;
use inkpost::routes::{categories, posts};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection pool: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);
    let bind_address = config.bind_address.clone();

    log::info!("Starting inkpost on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            // `/posts/published` must register ahead of `/posts/{slug}`.
            .service(posts::list_posts)
            .service(posts::list_published_posts)
            .service(posts::get_post_by_slug)
            .service(posts::create_post)
            .service(posts::update_post)
            .service(posts::delete_post)
            .service(categories::list_categories)
            .service(categories::create_category)
            .service(categories::update_category)
            .service(categories::delete_category)
    })
    .bind(bind_address)?
    .run()
    .await
}
