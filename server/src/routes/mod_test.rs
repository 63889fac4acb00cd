use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_with_test_state() {
    let (state, _) = crate::state::test_helpers::test_app_state();
    let _router: Router = api_routes(state);
}
