use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod login;
pub mod private;
pub mod signup;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/signup").service(signup::signup));
    cfg.service(web::scope("/login").service(login::login));
    cfg.service(web::scope("/private").service(private::private));
    // Listing and bulk deletion sit behind the same bearer gate; they used
    // to be wide open.
    cfg.service(
        web::scope("/user")
            .service(users::list)
            .wrap(user_auth.clone()),
    );
    cfg.service(
        web::scope("/users")
            .service(users::delete_all)
            .wrap(user_auth),
    );
}
