#[cfg(test)]
mod proxy_tests {
    mod query_string_tests {
        use crate::proxy::structs::query_string::QueryString;

        #[test]
        fn test_round_trip_is_exact() {
            for query in ["a=1&b&c=&a=2", "info_hash=%AB%CD&peer_id=-UT3500-", "&&", "x==y", ""] {
                assert_eq!(QueryString::parse(query).to_string(), query);
            }
        }

        #[test]
        fn test_get_returns_first_valued_item() {
            let query = QueryString::parse("flag&uploaded=10&uploaded=20");
            assert_eq!(query.get("uploaded"), Some("10"));
            assert_eq!(query.get("flag"), None);
            assert!(!query.contains("flag"));
        }

        #[test]
        fn test_empty_value_is_present() {
            let query = QueryString::parse("info_hash=&left=5");
            assert_eq!(query.get("info_hash"), Some(""));
            assert!(query.contains("info_hash"));
        }

        #[test]
        fn test_replace_first_leaves_duplicates() {
            let mut query = QueryString::parse("uploaded=1&left=7&uploaded=2");
            assert!(query.replace_first("uploaded", "9"));
            assert_eq!(query.to_string(), "uploaded=9&left=7&uploaded=2");
        }

        #[test]
        fn test_replace_first_missing_key() {
            let mut query = QueryString::parse("left=7");
            assert!(!query.replace_first("downloaded", "0"));
            assert_eq!(query.to_string(), "left=7");
        }

        #[test]
        fn test_keys_match_exactly() {
            let query = QueryString::parse("xuploaded=5&uploaded=6");
            assert_eq!(query.get("uploaded"), Some("6"));
            assert_eq!(query.pairs().len(), 2);
        }
    }

    mod announce_request_tests {
        use crate::proxy::enums::intercept_error::InterceptError;
        use crate::proxy::structs::announce_request::AnnounceRequest;
        use crate::proxy::structs::upstream::Upstream;
        use crate::swarm::structs::swarm_id::SwarmId;

        #[test]
        fn test_parse_full_request() {
            let text = "GET http://tracker.example:6969/announce?info_hash=ABC&uploaded=1000&event=started HTTP/1.0\r\nHost: tracker.example:6969\r\nUser-Agent: client/1.0\r\n\r\n";
            let request = AnnounceRequest::parse(text).unwrap();
            assert_eq!(request.upstream, Upstream::new("tracker.example", 6969));
            assert_eq!(request.path, "/announce");
            assert_eq!(request.version, "HTTP/1.0");
            assert_eq!(request.headers, vec!["Host: tracker.example:6969", "User-Agent: client/1.0"]);
            assert_eq!(request.params.info_hash, Some(SwarmId::from("ABC")));
            assert_eq!(request.params.uploaded.as_deref(), Some("1000"));
            assert_eq!(request.params.event.as_deref(), Some("started"));
            assert_eq!(request.params.downloaded, None);
        }

        #[test]
        fn test_default_port() {
            let request = AnnounceRequest::parse("GET http://t.example/a?info_hash=X HTTP/1.1\r\n\r\n").unwrap();
            assert_eq!(request.upstream.port, 80);
        }

        #[test]
        fn test_origin_form_is_ineligible() {
            let error = AnnounceRequest::parse("GET /announce?info_hash=X HTTP/1.1\r\n\r\n").unwrap_err();
            assert_eq!(error, InterceptError::NotAbsoluteGet);
            assert!(error.is_ineligible());
        }

        #[test]
        fn test_other_methods_are_ineligible() {
            let error = AnnounceRequest::parse("POST http://t.example/a?info_hash=X HTTP/1.1\r\n\r\n").unwrap_err();
            assert_eq!(error, InterceptError::NotAbsoluteGet);
            let error = AnnounceRequest::parse("GET https://t.example/a?info_hash=X HTTP/1.1\r\n\r\n").unwrap_err();
            assert_eq!(error, InterceptError::NotAbsoluteGet);
        }

        #[test]
        fn test_missing_info_hash_is_ineligible() {
            let error = AnnounceRequest::parse("GET http://t.example/a?uploaded=1 HTTP/1.1\r\n\r\n").unwrap_err();
            assert_eq!(error, InterceptError::MissingSwarmId);
            assert!(error.is_ineligible());
        }

        #[test]
        fn test_uri_without_path_is_unresolvable() {
            let error = AnnounceRequest::parse("GET http://t.example?info_hash=X HTTP/1.1\r\n\r\n").unwrap_err();
            assert_eq!(error, InterceptError::UnresolvableUri(String::from("http://t.example?info_hash=X")));
            assert!(!error.is_ineligible());
        }

        #[test]
        fn test_port_out_of_range_is_unresolvable() {
            let error = AnnounceRequest::parse("GET http://t.example:70000/a?info_hash=X HTTP/1.1\r\n\r\n").unwrap_err();
            assert!(matches!(error, InterceptError::UnresolvableUri(_)));
        }

        #[test]
        fn test_body_after_blank_line_is_dropped() {
            let request = AnnounceRequest::parse("GET http://t.example/a?info_hash=X HTTP/1.1\r\nAccept: */*\r\n\r\nleftover").unwrap();
            assert_eq!(request.headers, vec!["Accept: */*"]);
        }

        #[test]
        fn test_bare_newlines_are_accepted() {
            let request = AnnounceRequest::parse("GET http://t.example/a?info_hash=X HTTP/1.1\nAccept: */*\n\n").unwrap();
            assert_eq!(request.headers, vec!["Accept: */*"]);
        }
    }

    mod intercept_tests {
        use crate::config::enums::upload_format::UploadFormat;
        use crate::config::structs::policy_config::PolicyConfig;
        use crate::proxy::enums::intercept_error::InterceptError;
        use crate::proxy::proxy::intercept;
        use crate::swarm::structs::swarm_id::SwarmId;
        use crate::swarm::structs::swarm_state::SwarmState;

        const ANNOUNCE: &str = "GET http://t.example:6969/announce?info_hash=ABC&uploaded=1000&downloaded=500&left=200 HTTP/1.1\r\nHost: t.example:6969\r\n\r\n";

        fn policy() -> PolicyConfig {
            PolicyConfig {
                seeder_threshold: 5,
                multiplier_low: 3.0,
                multiplier_high: 1.5,
                suppress_download: false,
                pretend_fully_seeded: false,
                upload_format: UploadFormat::float,
            }
        }

        #[test]
        fn test_unknown_swarm_uses_low_multiplier() {
            let announce = intercept(ANNOUNCE, &SwarmState::new(), &policy()).unwrap();
            assert_eq!(
                announce.request,
                "GET /announce?info_hash=ABC&uploaded=3000.0&downloaded=500&left=200 HTTP/1.1\r\nHost: t.example:6969\r\n\r\n"
            );
            assert_eq!(announce.decision.multiplier, 3.0);
            assert_eq!(announce.original_uploaded.as_deref(), Some("1000"));
            assert_eq!(announce.rewritten_uploaded.as_deref(), Some("3000.0"));
        }

        #[test]
        fn test_started_announce_for_new_swarm() {
            let text = "GET http://tracker.example.com:6969/announce?info_hash=ABC&uploaded=1000&downloaded=500&left=0&event=started HTTP/1.1\r\nHost: tracker.example.com:6969\r\n\r\n";
            let announce = intercept(text, &SwarmState::new(), &policy()).unwrap();
            assert_eq!(
                announce.request,
                "GET /announce?info_hash=ABC&uploaded=3000.0&downloaded=500&left=0&event=started HTTP/1.1\r\nHost: tracker.example.com:6969\r\n\r\n"
            );
        }

        #[test]
        fn test_well_seeded_swarm_uses_high_multiplier() {
            let swarms = SwarmState::new();
            swarms.set(SwarmId::from("ABC"), 12);
            let announce = intercept(ANNOUNCE, &swarms, &policy()).unwrap();
            assert!(announce.request.starts_with("GET /announce?info_hash=ABC&uploaded=1500.0&downloaded=500&left=200 HTTP/1.1\r\n"));
        }

        #[test]
        fn test_seeders_below_threshold_use_low_multiplier() {
            let swarms = SwarmState::new();
            swarms.set(SwarmId::from("ABC"), 4);
            let announce = intercept(ANNOUNCE, &swarms, &policy()).unwrap();
            assert_eq!(announce.rewritten_uploaded.as_deref(), Some("3000.0"));
        }

        #[test]
        fn test_suppress_download_and_pretend_seeded() {
            let mut policy = policy();
            policy.suppress_download = true;
            policy.pretend_fully_seeded = true;
            let announce = intercept(ANNOUNCE, &SwarmState::new(), &policy).unwrap();
            assert!(announce.request.starts_with("GET /announce?info_hash=ABC&uploaded=3000.0&downloaded=0&left=0 HTTP/1.1\r\n"));
        }

        #[test]
        fn test_absent_fields_are_not_added() {
            let mut policy = policy();
            policy.suppress_download = true;
            policy.pretend_fully_seeded = true;
            let announce = intercept("GET http://t.example/a?info_hash=ABC&port=6881 HTTP/1.1\r\n\r\n", &SwarmState::new(), &policy).unwrap();
            assert_eq!(announce.request, "GET /a?info_hash=ABC&port=6881 HTTP/1.1\r\nHost: t.example:80\r\n\r\n");
            assert_eq!(announce.original_uploaded, None);
            assert_eq!(announce.rewritten_uploaded, None);
        }

        #[test]
        fn test_non_numeric_upload_counts_as_zero() {
            let announce = intercept("GET http://t.example/a?info_hash=ABC&uploaded=lots HTTP/1.1\r\n\r\n", &SwarmState::new(), &policy()).unwrap();
            assert_eq!(announce.rewritten_uploaded.as_deref(), Some("0.0"));
        }

        #[test]
        fn test_integer_upload_format() {
            let mut policy = policy();
            policy.upload_format = UploadFormat::integer;
            policy.multiplier_low = 1.25;
            let announce = intercept("GET http://t.example/a?info_hash=ABC&uploaded=1001 HTTP/1.1\r\n\r\n", &SwarmState::new(), &policy).unwrap();
            assert_eq!(announce.rewritten_uploaded.as_deref(), Some("1251"));
        }

        #[test]
        fn test_host_header_is_replaced_case_insensitively() {
            let text = "GET http://t.example:2710/a?info_hash=ABC HTTP/1.1\r\nhost: proxy.local\r\nAccept: */*\r\n\r\n";
            let announce = intercept(text, &SwarmState::new(), &policy()).unwrap();
            assert_eq!(announce.request, "GET /a?info_hash=ABC HTTP/1.1\r\nHost: t.example:2710\r\nAccept: */*\r\n\r\n");
        }

        #[test]
        fn test_path_without_query_mark_is_ineligible() {
            let error = intercept("GET http://t.example/a HTTP/1.1\r\n\r\n", &SwarmState::new(), &policy()).unwrap_err();
            assert_eq!(error, InterceptError::MissingSwarmId);
        }

        #[test]
        fn test_identifier_is_kept_encoded() {
            let announce = intercept("GET http://t.example/a?info_hash=%12%AB HTTP/1.1\r\n\r\n", &SwarmState::new(), &policy()).unwrap();
            assert_eq!(announce.swarm_id, SwarmId::from("%12%AB"));
        }

        #[test]
        fn test_state_is_only_read() {
            let swarms = SwarmState::new();
            intercept(ANNOUNCE, &swarms, &policy()).unwrap();
            assert!(swarms.is_empty());
        }
    }

    mod tracker_reply_tests {
        use crate::proxy::structs::reply_summary::ReplySummary;
        use crate::proxy::structs::tracker_reply::TrackerReply;

        #[test]
        fn test_bare_payload() {
            let reply = TrackerReply::new(b"d8:completei12e10:incompletei3ee".to_vec());
            assert_eq!(reply.payload_offset(), 0);
            let summary = ReplySummary::from_value(&reply.decode().unwrap()).unwrap();
            assert_eq!(summary.complete, Some(12));
            assert_eq!(summary.incomplete, Some(3));
            assert_eq!(summary.interval, None);
        }

        #[test]
        fn test_http_framed_payload() {
            let reply = TrackerReply::new(b"HTTP/1.1 200 OK\r\nContent-Length: 26\r\n\r\nd8:completei7e8:intervali900ee".to_vec());
            let summary = ReplySummary::from_value(&reply.decode().unwrap()).unwrap();
            assert_eq!(summary.seeders(), 7);
            assert_eq!(summary.interval, Some(900));
        }

        #[test]
        fn test_http_headers_without_body() {
            let reply = TrackerReply::new(b"HTTP/1.1 500 Internal Server Error\r\n".to_vec());
            assert_eq!(reply.payload_offset(), reply.len());
            assert!(reply.decode().is_err());
        }

        #[test]
        fn test_missing_complete_counts_as_zero() {
            let reply = TrackerReply::new(b"d14:failure reason9:not founde".to_vec());
            let summary = ReplySummary::from_value(&reply.decode().unwrap()).unwrap();
            assert_eq!(summary.seeders(), 0);
            assert_eq!(summary.failure_reason.as_deref(), Some("not found"));
        }

        #[test]
        fn test_non_dictionary_has_no_summary() {
            let reply = TrackerReply::new(b"li1ei2ee".to_vec());
            assert_eq!(ReplySummary::from_value(&reply.decode().unwrap()), None);
        }

        #[test]
        fn test_summary_display() {
            let summary = ReplySummary { complete: Some(3), incomplete: None, interval: Some(60), failure_reason: None };
            assert_eq!(summary.to_string(), "complete=3 incomplete=- interval=60");
        }
    }

    mod handler_tests {
        use std::net::SocketAddr;
        use std::sync::Arc;
        use async_trait::async_trait;
        use parking_lot::Mutex;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use crate::config::structs::configuration::Configuration;
        use crate::proxy::enums::forward_error::ForwardError;
        use crate::proxy::enums::handle_outcome::HandleOutcome;
        use crate::proxy::structs::proxy_state::ProxyState;
        use crate::proxy::structs::upstream::Upstream;
        use crate::proxy::traits::tracker_forwarder::TrackerForwarder;
        use crate::swarm::structs::swarm_id::SwarmId;

        const ANNOUNCE: &str = "GET http://t.example:6969/announce?info_hash=ABC&uploaded=1000 HTTP/1.1\r\nHost: t.example:6969\r\n\r\n";

        struct FakeForwarder {
            reply: Option<Vec<u8>>,
            seen: Mutex<Vec<(Upstream, String)>>,
        }

        impl FakeForwarder {
            fn replying(reply: &[u8]) -> Arc<FakeForwarder> {
                Arc::new(FakeForwarder { reply: Some(reply.to_vec()), seen: Mutex::new(Vec::new()) })
            }

            fn failing() -> Arc<FakeForwarder> {
                Arc::new(FakeForwarder { reply: None, seen: Mutex::new(Vec::new()) })
            }
        }

        #[async_trait]
        impl TrackerForwarder for FakeForwarder {
            async fn forward(&self, upstream: &Upstream, request: &[u8]) -> Result<Vec<u8>, ForwardError> {
                self.seen.lock().push((upstream.clone(), String::from_utf8_lossy(request).into_owned()));
                match &self.reply {
                    Some(reply) => Ok(reply.clone()),
                    None => Err(ForwardError::ConnectTimeout(upstream.to_string())),
                }
            }
        }

        fn peer() -> SocketAddr {
            "127.0.0.1:50000".parse().unwrap()
        }

        async fn exchange(state: &ProxyState, request: &[u8]) -> (Option<HandleOutcome>, Vec<u8>) {
            let (mut client, server) = tokio::io::duplex(64 * 1024);
            client.write_all(request).await.unwrap();
            let outcome = state.handle_connection(server, peer()).await;
            let mut reply = Vec::new();
            client.read_to_end(&mut reply).await.unwrap();
            (outcome, reply)
        }

        #[tokio::test]
        async fn test_reply_is_relayed_and_seeders_recorded() {
            let body = b"d8:completei12e10:incompletei3e8:intervali1800ee";
            let forwarder = FakeForwarder::replying(body);
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), forwarder.clone());

            let (outcome, reply) = exchange(&state, ANNOUNCE.as_bytes()).await;
            assert_eq!(reply, body.to_vec());
            assert!(matches!(outcome, Some(HandleOutcome::Relayed { swarm_updated: true, .. })));
            assert_eq!(state.swarms.get(&SwarmId::from("ABC")), Some(12));

            let seen = forwarder.seen.lock();
            assert_eq!(seen.len(), 1);
            assert_eq!(seen[0].0, Upstream::new("t.example", 6969));
            assert!(seen[0].1.starts_with("GET /announce?info_hash=ABC&uploaded=3000.0 HTTP/1.1\r\n"));
        }

        #[tokio::test]
        async fn test_second_announce_uses_recorded_seeders() {
            let forwarder = FakeForwarder::replying(b"d8:completei12ee");
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), forwarder.clone());

            exchange(&state, ANNOUNCE.as_bytes()).await;
            exchange(&state, ANNOUNCE.as_bytes()).await;
            let seen = forwarder.seen.lock();
            assert!(seen[1].1.contains("uploaded=1500.0"));
        }

        #[tokio::test]
        async fn test_ineligible_request_gets_no_reply() {
            let forwarder = FakeForwarder::replying(b"d8:completei1ee");
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), forwarder.clone());

            let (outcome, reply) = exchange(&state, b"GET http://t.example/announce?uploaded=1 HTTP/1.1\r\n\r\n").await;
            assert!(reply.is_empty());
            assert!(matches!(outcome, Some(HandleOutcome::Ignored(_))));
            assert!(forwarder.seen.lock().is_empty());
            assert_eq!(state.get_stats().requests_ignored, 1);
        }

        #[tokio::test]
        async fn test_forward_failure_closes_without_reply() {
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), FakeForwarder::failing());

            let (outcome, reply) = exchange(&state, ANNOUNCE.as_bytes()).await;
            assert!(reply.is_empty());
            assert!(matches!(outcome, Some(HandleOutcome::ForwardFailed { .. })));
            assert!(state.swarms.is_empty());
            assert_eq!(state.get_stats().forward_failures, 1);
        }

        #[tokio::test]
        async fn test_undecodable_reply_is_still_relayed() {
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), FakeForwarder::replying(b"<html>oops</html>"));

            let (outcome, reply) = exchange(&state, ANNOUNCE.as_bytes()).await;
            assert_eq!(reply, b"<html>oops</html>".to_vec());
            assert!(matches!(outcome, Some(HandleOutcome::Relayed { swarm_updated: false, .. })));
            assert!(state.swarms.is_empty());
            assert_eq!(state.get_stats().decode_failures, 1);
        }

        #[tokio::test]
        async fn test_non_dictionary_reply_leaves_state_alone() {
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), FakeForwarder::replying(b"i42e"));

            let (_, reply) = exchange(&state, ANNOUNCE.as_bytes()).await;
            assert_eq!(reply, b"i42e".to_vec());
            assert!(state.swarms.is_empty());
        }

        #[tokio::test]
        async fn test_empty_connection() {
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), FakeForwarder::failing());
            let (client, server) = tokio::io::duplex(1024);
            drop(client);
            let outcome = state.handle_connection(server, peer()).await;
            assert!(matches!(outcome, Some(HandleOutcome::Empty)));
            assert_eq!(state.get_stats().connections_handled, 1);
            assert_eq!(state.get_stats().connections_active, 0);
        }

        #[tokio::test]
        async fn test_policy_change_applies_to_next_request() {
            let forwarder = FakeForwarder::replying(b"d8:completei0ee");
            let state = ProxyState::with_forwarder(Arc::new(Configuration::init()), forwarder.clone());
            let mut policy = state.policy();
            policy.multiplier_low = 2.0;
            state.set_policy(policy);

            exchange(&state, ANNOUNCE.as_bytes()).await;
            assert!(forwarder.seen.lock()[0].1.contains("uploaded=2000.0"));
        }
    }
}
