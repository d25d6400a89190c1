use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{self, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use log::{debug, error, info, warn};
use projectinfo::api::{Client, Error, Resource};
use projectinfo::path::parse_project_path;
use projectinfo::summary::ProjectInfoService;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct Server<CLIENT: Client> {
    listener: TcpListener,
    service: Arc<ProjectInfoService<CLIENT>>,
}

impl<CLIENT: 'static + Client> Server<CLIENT> {
    pub async fn bind(addr: SocketAddr, service: ProjectInfoService<CLIENT>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Server {
            listener,
            service: Arc::new(service),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until the task is dropped, serving each one on its own task.
    pub async fn run(self) {
        if let Ok(addr) = self.local_addr() {
            info!("Listening on http://{}", addr);
        }
        loop {
            match self.listener.accept().await {
                Ok((stream, peer_addr)) => {
                    debug!("Accepting connection from {}", peer_addr);
                    serve_connection(stream, Arc::clone(&self.service));
                }
                Err(err) => error!("Failed to accept connection: {}", err),
            }
        }
    }
}

fn serve_connection<CLIENT: 'static + Client>(
    stream: tokio::net::TcpStream,
    service: Arc<ProjectInfoService<CLIENT>>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handle_request(req, Arc::clone(&service))),
        );
        if let Err(err) = conn.await {
            error!("Connection error: {}", err);
        }
    });
}

pub async fn handle_request<CLIENT: Client>(
    req: Request<Incoming>,
    service: Arc<ProjectInfoService<CLIENT>>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    debug!("{} {}", req.method(), req.uri());

    let repo = match parse_project_path(req.uri().path()) {
        Ok(repo) => repo,
        Err(err) => return Ok(text_response(StatusCode::BAD_REQUEST, &err.to_string())),
    };

    let response = match service.project_info(&repo).await {
        Ok(info) => match serde_json::to_vec(&info) {
            Ok(body) => json_response(body),
            Err(err) => text_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
        },
        Err(err) => {
            warn!("Failed to summarize {}: {:?}", repo, err);
            text_response(status_of(&err), &err.to_string())
        }
    };
    Ok(response)
}

/// Status reported to the caller for an upstream failure.
pub fn status_of(err: &Error) -> StatusCode {
    match err {
        Error::Unreachable { .. } => StatusCode::NOT_FOUND,
        Error::Decode {
            resource: Resource::Languages,
            ..
        } => StatusCode::CONFLICT,
        // GitHub answers a missing repository with an error object instead of a contributor list
        Error::Decode {
            resource: Resource::Contributors,
            ..
        } => StatusCode::NOT_FOUND,
        Error::Error(_) | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn json_response(body: Vec<u8>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn text_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(format!("{}\n", message))));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}
