#[cfg(test)]
mod tests {
    use rocket::http::{Header, Status};
    use rocket::local::blocking::Client;
    use shared::{ErrorResponse, models::*};
    use crate::{
        build_rocket,
        config::ServerConfig,
        cors::CORS,
        error::ApiError,
        rate_limiter::RateLimiter,
        routes::AppState,
        session::{SessionRegistry, DEFAULT_SESSION_TTL_MINUTES},
        store::MemoryStore,
    };

    fn client() -> Client {
        let state = AppState::new(MemoryStore::new(), 60);
        Client::tracked(build_rocket(state, CORS::new(Some("https://cookies.example".into()))))
            .expect("valid rocket instance")
    }

    fn sign_in(client: &Client) -> Header<'static> {
        let response = client.get("/api/session").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let grant: SessionGrant = response.into_json().expect("session grant");
        assert!(!grant.token.is_empty());
        assert_eq!(grant.expires_in_seconds, 3600);
        Header::new("Authorization", format!("Bearer {}", grant.token))
    }

    fn add(client: &Client, auth: &Header<'static>, name: &str) -> Competitor {
        let request = CreateCompetitorRequest {
            name: name.to_string(),
            image_url: format!("https://res.cloudinary.com/demo/image/upload/v1/{}.jpg", name.to_lowercase()),
        };
        let response = client.post("/api/competitors")
            .header(auth.clone())
            .json(&request)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        response.into_json().expect("created competitor")
    }

    fn list(client: &Client, auth: &Header<'static>) -> Vec<Competitor> {
        client.get("/api/competitors")
            .header(auth.clone())
            .dispatch()
            .into_json()
            .expect("competitor listing")
    }

    #[test]
    fn test_competitor_routes_require_session() {
        let client = client();

        let response = client.get("/api/competitors").dispatch();
        assert_eq!(response.status(), Status::Unauthorized);

        let response = client.get("/api/competitors")
            .header(Header::new("Authorization", "Bearer not-a-real-token"))
            .dispatch();
        assert_eq!(response.status(), Status::Unauthorized);

        let response = client.delete(format!("/api/competitors/{}", uuid::Uuid::new_v4()))
            .dispatch();
        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[test]
    fn test_create_and_list_in_insertion_order() {
        let client = client();
        let auth = sign_in(&client);

        let first = add(&client, &auth, "Snickerdoodle");
        let second = add(&client, &auth, "Oatmeal");
        assert_eq!(first.flavor_votes, 0);
        assert_eq!(first.looks_votes, 0);

        let listing = list(&client, &auth);
        assert_eq!(listing, vec![first, second]);
    }

    #[test]
    fn test_create_trims_name() {
        let client = client();
        let auth = sign_in(&client);

        let competitor = add(&client, &auth, "  Macaron ");
        assert_eq!(competitor.name, "Macaron");
    }

    #[test]
    fn test_create_rejects_invalid_entries() {
        let client = client();
        let auth = sign_in(&client);

        let response = client.post("/api/competitors")
            .header(auth.clone())
            .json(&CreateCompetitorRequest { name: "   ".into(), image_url: "https://x.test/a.jpg".into() })
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        let body: ErrorResponse = response.into_json().expect("error body");
        assert_eq!(body.error, "Please provide both a name and an image!");

        let response = client.post("/api/competitors")
            .header(auth.clone())
            .json(&CreateCompetitorRequest { name: "Ginger".into(), image_url: "ftp://x.test/a.jpg".into() })
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        assert!(list(&client, &auth).is_empty());
    }

    #[test]
    fn test_votes_increment_server_side() {
        let client = client();
        let auth = sign_in(&client);
        let cookie = add(&client, &auth, "Shortbread");

        for _ in 0..2 {
            let response = client.post(format!("/api/competitors/{}/votes/flavor", cookie.id))
                .header(auth.clone())
                .dispatch();
            assert_eq!(response.status(), Status::Ok);
        }
        let response = client.post(format!("/api/competitors/{}/votes/looks", cookie.id))
            .header(auth.clone())
            .dispatch();
        let updated: Competitor = response.into_json().expect("updated competitor");
        assert_eq!(updated.flavor_votes, 2);
        assert_eq!(updated.looks_votes, 1);

        let stored = list(&client, &auth);
        assert_eq!(stored[0].flavor_votes, 2);
        assert_eq!(stored[0].looks_votes, 1);
    }

    #[test]
    fn test_vote_errors() {
        let client = client();
        let auth = sign_in(&client);
        let cookie = add(&client, &auth, "Biscotti");

        let response = client.post(format!("/api/competitors/{}/votes/crunch", cookie.id))
            .header(auth.clone())
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let response = client.post(format!("/api/competitors/{}/votes/flavor", uuid::Uuid::new_v4()))
            .header(auth.clone())
            .dispatch();
        assert_eq!(response.status(), Status::NotFound);
        let body: ErrorResponse = response.into_json().expect("error body");
        assert_eq!(body.error, "Competitor not found");

        let response = client.post("/api/competitors/not-a-uuid/votes/flavor")
            .header(auth.clone())
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let client = client();
        let auth = sign_in(&client);
        let cookie = add(&client, &auth, "Madeleine");

        for _ in 0..2 {
            let response = client.delete(format!("/api/competitors/{}", cookie.id))
                .header(auth.clone())
                .dispatch();
            assert_eq!(response.status(), Status::NoContent);
        }

        assert!(list(&client, &auth).is_empty());
    }

    #[test]
    fn test_cors_headers() {
        let client = client();

        let response = client.get("/api/session")
            .header(Header::new("Origin", "http://localhost:8080"))
            .dispatch();
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("http://localhost:8080")
        );

        let response = client.get("/api/session")
            .header(Header::new("Origin", "https://cookies.example"))
            .dispatch();
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("https://cookies.example")
        );

        let response = client.get("/api/session")
            .header(Header::new("Origin", "https://elsewhere.example"))
            .dispatch();
        assert!(response.headers().get_one("Access-Control-Allow-Origin").is_none());

        let response = client.options("/api/competitors")
            .header(Header::new("Origin", "http://localhost:8080"))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Headers"),
            Some("Content-Type, Authorization")
        );
    }

    #[test]
    fn test_session_expiry_and_purge() {
        let expired = SessionRegistry::new(0);
        let grant = expired.issue().expect("token");
        assert!(!expired.is_valid(&grant.token));
        assert_eq!(expired.purge_expired(), 1);
        assert!(expired.is_empty());

        let live = SessionRegistry::new(5);
        let grant = live.issue().expect("token");
        assert!(live.is_valid(&grant.token));
        assert!(!live.is_valid("unknown"));
        assert_eq!(live.purge_expired(), 0);
        assert_eq!(live.len(), 1);
    }

    #[test]
    fn test_full_registry_evicts_oldest_only() {
        let registry = SessionRegistry::with_capacity(60, 3);
        let oldest = registry.issue().expect("token");
        let middle = registry.issue().expect("token");
        let newest = registry.issue().expect("token");
        assert_eq!(registry.len(), 3);

        let latest = registry.issue().expect("token");
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_valid(&oldest.token));
        assert!(registry.is_valid(&middle.token));
        assert!(registry.is_valid(&newest.token));
        assert!(registry.is_valid(&latest.token));
    }

    #[test]
    fn test_live_session_survives_sign_in_flood() {
        let state = AppState::new(MemoryStore::new(), 60)
            .with_session_limiter(RateLimiter::new(3, 1));
        let client = Client::tracked(build_rocket(state, CORS::new(None)))
            .expect("valid rocket instance");
        let auth = sign_in(&client);

        for _ in 0..2 {
            assert_eq!(client.get("/api/session").dispatch().status(), Status::Ok);
        }
        let response = client.get("/api/session").dispatch();
        assert_eq!(response.status(), Status::TooManyRequests);
        let body: ErrorResponse = response.into_json().expect("error body");
        assert!(body.error.starts_with("Too many sign-in attempts"));

        let response = client.get("/api/competitors").header(auth).dispatch();
        assert_eq!(response.status(), Status::Ok);
    }

    #[test]
    fn test_rate_limiter_keys_are_independent() {
        let limiter = RateLimiter::new(1, 1);
        assert!(limiter.check("session:10.0.0.1").is_ok());
        assert!(matches!(limiter.check("session:10.0.0.1"), Err(ApiError::RateLimited(_))));
        assert!(limiter.check("session:10.0.0.2").is_ok());
    }

    #[test]
    fn test_shared_errors_keep_their_status() {
        use shared::{Error, ErrorCode};

        let not_found: ApiError = Error::new(ErrorCode::NotFound, "gone").into();
        assert_eq!(not_found.status(), Status::NotFound);
        let unauthorized: ApiError = Error::new(ErrorCode::Unauthorized, "no").into();
        assert_eq!(unauthorized.status(), Status::Unauthorized);
        let unavailable: ApiError = Error::remote("down", "timeout").into();
        assert_eq!(unavailable.status(), Status::ServiceUnavailable);
        let invalid: ApiError = "crunch".parse::<Category>().unwrap_err().into();
        assert_eq!(invalid.status(), Status::BadRequest);
    }

    #[test]
    fn test_tokens_are_unique() {
        let registry = SessionRegistry::new(5);
        let a = registry.issue().expect("token");
        let b = registry.issue().expect("token");
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "ALLOWED_ORIGIN" => Some("https://cookies.example/".into()),
            "SESSION_TTL_MINUTES" => Some("30".into()),
            _ => None,
        });
        assert_eq!(config.allowed_origin.as_deref(), Some("https://cookies.example"));
        assert_eq!(config.session_ttl_minutes, 30);

        let config = ServerConfig::from_lookup(|key| match key {
            "SESSION_TTL_MINUTES" => Some("soon".into()),
            _ => None,
        });
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.session_ttl_minutes, DEFAULT_SESSION_TTL_MINUTES);
    }
}
