//! Integration tests for the dav_redirect library.
//!
//! These tests drive `run_resolve()` and the resolver against mock HTTP
//! servers. They do not make real network requests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
    use url::Url;

    use dav_redirect::initialization::init_transport;
    use dav_redirect::{
        run_resolve, Config, DavRequest, RedirectResolver, ResolverConfig, Termination, Transport,
    };

    fn dav_url(server: &Server, path: &str) -> String {
        format!("http://{}{}", server.addr(), path)
    }

    /// A MOVE redirected to another server carries a rewritten Destination
    #[tokio::test]
    async fn test_move_redirect_rewrites_destination() {
        let old = Server::run();
        let new = Server::run();
        let new_source = dav_url(&new, "/remote.php/dav/files/u/a.txt");
        let new_destination = dav_url(&new, "/remote.php/dav/files/u/b.txt");

        old.expect(
            Expectation::matching(request::method_path("MOVE", "/remote.php/dav/files/u/a.txt"))
                .respond_with(status_code(307).append_header("Location", new_source.as_str())),
        );
        new.expect(
            Expectation::matching(all_of![
                request::method_path("MOVE", "/remote.php/dav/files/u/a.txt"),
                request::headers(contains(("destination", matches(&*new_destination)))),
            ])
            .respond_with(status_code(201)),
        );

        let config = Config {
            url: dav_url(&old, "/remote.php/dav/files/u/a.txt"),
            method: "MOVE".to_string(),
            destination: Some(dav_url(&old, "/remote.php/dav/files/u/b.txt")),
            ..Default::default()
        };
        let report = run_resolve(config).await.expect("resolve should succeed");

        assert_eq!(report.termination, Termination::Completed);
        assert_eq!(report.final_status, 201);
        assert_eq!(report.final_url, new_source);
        assert_eq!(report.final_destination.as_deref(), Some(new_destination.as_str()));
        assert_eq!(report.chain.locations(), [new_source.as_str()]);
        assert_eq!(report.chain.statuses(), [201]);
        assert_eq!(report.base_uri, format!("http://{}", old.addr()));
    }

    /// Permanent moves are reported so callers can update stored addresses
    #[tokio::test]
    async fn test_permanent_redirect_is_reported() {
        let server = Server::run();
        let target = dav_url(&server, "/new/remote.php/dav/files/u/");

        server.expect(
            Expectation::matching(request::method_path("PROPFIND", "/remote.php/dav/files/u/"))
                .respond_with(status_code(301).append_header("Location", target.as_str())),
        );
        server.expect(
            Expectation::matching(request::method_path("PROPFIND", "/new/remote.php/dav/files/u/"))
                .respond_with(status_code(207)),
        );

        let config = Config {
            url: dav_url(&server, "/remote.php/dav/files/u/"),
            method: "PROPFIND".to_string(),
            headers: vec!["Depth: 1".to_string()],
            ..Default::default()
        };
        let report = run_resolve(config).await.expect("resolve should succeed");

        assert_eq!(report.final_status, 207);
        assert_eq!(report.permanent_location.as_deref(), Some(target.as_str()));
        assert!(report.final_destination.is_none());
    }

    /// Relative Location values resolve against the current URL
    #[tokio::test]
    async fn test_relative_location() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/remote.php/dav/old/"))
                .respond_with(status_code(302).append_header("Location", "/remote.php/dav/new/")),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/remote.php/dav/new/"))
                .respond_with(status_code(200)),
        );

        let config = Config {
            url: dav_url(&server, "/remote.php/dav/old/"),
            ..Default::default()
        };
        let report = run_resolve(config).await.expect("resolve should succeed");

        assert_eq!(report.final_status, 200);
        assert_eq!(report.final_url, dav_url(&server, "/remote.php/dav/new/"));
        assert_eq!(report.chain.locations(), ["/remote.php/dav/new/"]);
    }

    /// A redirect without Location ends as 404
    #[tokio::test]
    async fn test_missing_location_reports_not_found() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/remote.php/dav/"))
                .respond_with(status_code(302)),
        );

        let config = Config {
            url: dav_url(&server, "/remote.php/dav/"),
            ..Default::default()
        };
        let report = run_resolve(config).await.expect("resolve should succeed");

        assert_eq!(report.termination, Termination::MissingLocation);
        assert_eq!(report.final_status, 404);
        assert_eq!(report.chain.redirections_count(), 0);
    }

    /// A redirect loop stops after the configured number of hops
    #[tokio::test]
    async fn test_redirect_loop_hits_limit() {
        let server = Server::run();
        let looping = dav_url(&server, "/remote.php/dav/loop");
        server.expect(
            Expectation::matching(request::method_path("GET", "/remote.php/dav/loop"))
                .times(4)
                .respond_with(status_code(302).append_header("Location", looping.as_str())),
        );

        let config = Config {
            url: looping.clone(),
            max_redirects: 3,
            ..Default::default()
        };
        let report = run_resolve(config).await.expect("resolve should succeed");

        assert_eq!(report.termination, Termination::RedirectLimit);
        assert_eq!(report.final_status, 302);
        assert_eq!(report.chain.redirections_count(), 3);
        assert_eq!(report.chain.statuses(), [302, 302, 302]);
    }

    /// 303 and 308 are returned as they are
    #[tokio::test]
    async fn test_see_other_is_not_followed() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/remote.php/dav/form"))
                .respond_with(status_code(303).append_header("Location", "/elsewhere")),
        );

        let config = Config {
            url: dav_url(&server, "/remote.php/dav/form"),
            method: "POST".to_string(),
            ..Default::default()
        };
        let report = run_resolve(config).await.expect("resolve should succeed");

        assert_eq!(report.termination, Termination::Completed);
        assert_eq!(report.final_status, 303);
        assert!(report.chain.locations().is_empty());
    }

    /// Unreachable targets surface as errors
    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        let config = Config {
            url: "http://127.0.0.1:1/remote.php/dav/".to_string(),
            connect_timeout_seconds: 2,
            ..Default::default()
        };
        let err = run_resolve(config).await.expect_err("port 1 should refuse");
        assert!(format!("{:#}", err).contains("Request to http://127.0.0.1:1/remote.php/dav/ failed"));
    }

    /// The resolver can be driven through a trait object
    #[tokio::test]
    async fn test_resolver_with_dyn_transport() {
        let server = Server::run();
        let target = dav_url(&server, "/remote.php/dav/b");
        server.expect(
            Expectation::matching(request::method_path("GET", "/remote.php/dav/a"))
                .respond_with(status_code(301).append_header("Location", target.as_str())),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/remote.php/dav/b"))
                .respond_with(status_code(200).body("done")),
        );

        let transport: Arc<dyn Transport> = Arc::new(
            init_transport(&Config::default())
                .await
                .expect("Failed to create transport"),
        );
        let url = Url::parse(&dav_url(&server, "/remote.php/dav/a")).expect("valid URL");
        let request = DavRequest::new(reqwest::Method::GET, url);
        let response = transport.execute(&request).await.expect("request should succeed");
        let base_uri = Url::parse(&dav_url(&server, "/")).expect("valid URL");

        let resolution = RedirectResolver::new(ResolverConfig::default())
            .follow_redirects(transport.as_ref(), request, response, &base_uri)
            .await
            .expect("resolve should succeed");

        assert_eq!(resolution.status(), reqwest::StatusCode::OK);
        assert_eq!(resolution.response.body().as_ref(), b"done");
        assert_eq!(resolution.request.url().as_str(), target);
    }
}
