use paperclip::actix::web;

use crate::handlers;

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(
            web::resource("/reco/{model_name}/{user_id}")
                .route(web::get().to(handlers::get_reco)),
        );
}
