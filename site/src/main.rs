use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::{env, path::PathBuf};

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")) // = site/
}

fn dist_dir() -> PathBuf {
    env::var("SITE_DIST")
        .map(PathBuf::from)
        .unwrap_or_else(|_| root().join("../dist"))
}

fn assets_dir() -> PathBuf {
    root().join("../assets")
}

fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw {
        Some(p) => p
            .trim()
            .parse()
            .with_context(|| format!("SITE_PORT is not a port number: {p:?}")),
        None => Ok(3000),
    }
}

fn bind_addr() -> anyhow::Result<(String, u16)> {
    let host = env::var("SITE_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = parse_port(env::var("SITE_PORT").ok().as_deref())?;
    Ok((host, port))
}

/// Any path the file routes miss belongs to the client-side router.
async fn spa(dist: web::Data<PathBuf>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(dist.join("index.html"))?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let (host, port) = bind_addr()?;
    let dist = dist_dir();
    log::info!("serving {} on http://{host}:{port}", dist.display());

    let dist_data = web::Data::new(dist.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(dist_data.clone())
            .wrap(Logger::default())
            // ① top-level static assets
            .service(Files::new("/assets", assets_dir()))
            // ② the SPA bundle built by Trunk
            .service(Files::new("/", dist.clone()).index_file("index.html"))
            // ③ fallback -> SPA for any other path
            .default_service(web::get().to(spa))
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn explicit_port_parses() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
    }

    #[test]
    fn junk_port_is_an_error() {
        assert!(parse_port(Some("not-a-port")).is_err());
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    fn empty_port_is_an_error() {
        assert!(parse_port(Some("")).is_err());
        assert!(parse_port(Some("   ")).is_err());
    }

    #[actix_web::test]
    async fn assets_route_serves_the_stylesheet() {
        use actix_web::test;

        let app = test::init_service(App::new().service(Files::new("/assets", assets_dir()))).await;

        let req = test::TestRequest::get()
            .uri("/assets/css/site.css")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
