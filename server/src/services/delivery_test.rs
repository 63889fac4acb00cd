use super::*;

fn message() -> ValidContact {
    ValidContact {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        company: None,
        message: "Let's build an engine.".to_owned(),
    }
}

#[tokio::test(start_paused = true)]
async fn simulated_delivery_waits_then_succeeds() {
    let delivery = SimulatedDelivery::new(Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    delivery.deliver(Uuid::new_v4(), &message()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(delivery.name(), "simulated");
}

#[test]
fn from_config_picks_collaborator() {
    let simulated = from_config(&DeliveryConfig::Simulated { delay: Duration::ZERO });
    assert_eq!(simulated.name(), "simulated");

    let resend = from_config(&DeliveryConfig::Resend {
        api_key: "re_test".to_owned(),
        from: "Portfolio <onboarding@resend.dev>".to_owned(),
        to: "me@example.com".to_owned(),
    });
    assert_eq!(resend.name(), "resend");
}

#[test]
fn template_contains_fields() {
    let id = Uuid::new_v4();
    let html = render_contact_template(id, &message());
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("Let&#39;s build an engine."));
    assert!(html.contains(&id.to_string()));
    assert!(!html.contains("{{"));
}

#[test]
fn template_escapes_visitor_input() {
    let mut msg = message();
    msg.name = "<script>alert(1)</script>".to_owned();
    msg.company = Some("Tom & Jerry \"Inc\"".to_owned());
    let html = render_contact_template(Uuid::nil(), &msg);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Tom &amp; Jerry &quot;Inc&quot;"));
}

#[test]
fn missing_company_renders_placeholder() {
    let html = render_contact_template(Uuid::nil(), &message());
    assert!(html.contains("<strong>Company:</strong> -"));
}

#[test]
fn subject_mentions_company_when_present() {
    let mut msg = message();
    assert_eq!(contact_subject(&msg), "Portfolio message from Ada Lovelace");
    msg.company = Some("Analytical Engines".to_owned());
    assert_eq!(contact_subject(&msg), "Portfolio message from Ada Lovelace (Analytical Engines)");
}
