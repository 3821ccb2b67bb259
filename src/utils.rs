/// Generates actix handlers that forward to `<name>_impl` and answer with the
/// given success status. Errors render through `ServiceError`.
#[macro_export]
macro_rules! json_funcs {
    ( $( ( $func_name:ident, $method:ident, $url:expr, $extract:ty, $status:ident ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[$method($url)]
                async fn $func_name(
                    services: web::Data<Services>,
                    info: $extract,
                ) -> Result<HttpResponse, ServiceError> {
                    let response = [<$func_name _impl>](services, info).await?;
                    Ok(HttpResponse::$status().json(response))
                }
            }
        )+
    };
}
