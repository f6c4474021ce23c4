// Integration tests for `Controller` against a wiremock booking server.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use barberia_core::{
    BarberForm, ClientForm, Collection, Controller, CoreError, DeleteOutcome, EntityId,
    NotificationKind, ServiceConfig, View,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Controller) {
    let server = MockServer::start().await;
    let url = format!("{}/api", server.uri()).parse().unwrap();
    let controller = Controller::new(ServiceConfig::new(url)).unwrap();
    (server, controller)
}

async fn mount_list(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{resource}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_empty_lists(server: &MockServer) {
    for resource in ["barberos", "clientes", "citas"] {
        mount_list(server, resource, json!([])).await;
    }
}

fn current_message(controller: &Controller) -> (String, NotificationKind) {
    let n = controller.notification().unwrap();
    (n.message, n.kind)
}

// ── Reload ──────────────────────────────────────────────────────────

#[tokio::test]
async fn reload_populates_all_collections() {
    let (server, controller) = setup().await;
    mount_list(
        &server,
        "barberos",
        json!([{ "id": 1, "nombre": "Luis", "activo": true }]),
    )
    .await;
    mount_list(
        &server,
        "clientes",
        json!([{ "id": 1, "nombre": "Ana", "documento": "123", "telefono": "555" }]),
    )
    .await;
    mount_list(
        &server,
        "citas",
        json!([{
            "id": 7,
            "fechaHoraInicio": "2025-03-14T10:00:00",
            "fechaHoraFin": "2025-03-14T10:30:00",
            "cliente": { "id": 1, "nombre": "Ana" },
            "barbero": { "id": 1, "nombre": "Luis" }
        }]),
    )
    .await;

    let report = controller.reload_all().await;

    assert!(report.is_complete());
    assert_eq!(controller.barbers_snapshot()[0].name, "Luis");
    assert_eq!(controller.clients_snapshot()[0].document, "123");
    let appt = &controller.appointments_snapshot()[0];
    assert_eq!(appt.id, EntityId::Numeric(7));
    assert_eq!(appt.client_name.as_deref(), Some("Ana"));
    assert!(controller.notification().is_none());
}

#[tokio::test]
async fn server_error_empties_collection_and_notifies() {
    let (server, controller) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/barberos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_list(
        &server,
        "clientes",
        json!([{ "id": 1, "nombre": "Ana", "documento": "123", "telefono": "555" }]),
    )
    .await;
    mount_list(&server, "citas", json!([])).await;

    let report = controller.reload_all().await;

    assert!(report.applied);
    assert_eq!(report.failed, vec![Collection::Barbers]);
    assert!(controller.barbers_snapshot().is_empty());
    assert_eq!(controller.clients_snapshot().len(), 1);
    assert_eq!(
        current_message(&controller),
        ("Failed to load barbers".into(), NotificationKind::Error)
    );
}

#[tokio::test]
async fn non_array_payload_yields_empty_collection() {
    let (server, controller) = setup().await;
    mount_list(&server, "barberos", json!([])).await;
    mount_list(&server, "clientes", json!([])).await;
    mount_list(&server, "citas", json!({ "error": "no disponible" })).await;

    let report = controller.reload_all().await;

    assert_eq!(report.failed, vec![Collection::Appointments]);
    assert!(controller.appointments_snapshot().is_empty());
    assert_eq!(
        current_message(&controller),
        ("Failed to load appointments".into(), NotificationKind::Error)
    );
}

#[tokio::test]
async fn listing_twice_without_changes_is_stable() {
    let (server, controller) = setup().await;
    mount_list(
        &server,
        "barberos",
        json!([
            { "id": 1, "nombre": "Luis", "activo": true },
            { "id": 2, "nombre": "Marta", "activo": false }
        ]),
    )
    .await;
    mount_list(&server, "clientes", json!([])).await;
    mount_list(&server, "citas", json!([])).await;

    let first = controller.reload_all().await;
    let before: Vec<_> = controller.barbers_snapshot().iter().map(|b| (**b).clone()).collect();
    let second = controller.reload_all().await;
    let after: Vec<_> = controller.barbers_snapshot().iter().map(|b| (**b).clone()).collect();

    assert!(second.generation > first.generation);
    assert_eq!(before, after);
}

#[tokio::test]
async fn slower_older_reload_is_discarded() {
    let (server, controller) = setup().await;
    // The first barbers fetch fails slowly; every later one succeeds.
    Mock::given(method("GET"))
        .and(path("/api/barberos"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(300)))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_list(
        &server,
        "barberos",
        json!([{ "id": 2, "nombre": "Marta", "activo": true }]),
    )
    .await;
    mount_list(&server, "clientes", json!([])).await;
    mount_list(&server, "citas", json!([])).await;

    let (older, newer) = tokio::join!(controller.reload_all(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.reload_all().await
    });

    assert!(newer.generation > older.generation);
    assert!(newer.is_complete());
    assert!(!older.applied);
    assert_eq!(older.failed, vec![Collection::Barbers]);
    assert_eq!(controller.barbers_snapshot()[0].name, "Marta");
    assert!(controller.notification().is_none());
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_barber_name_sends_nothing() {
    let (server, controller) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/barberos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = BarberForm {
        specialty: "Fade".into(),
        ..BarberForm::default()
    };
    let err = controller.submit(&mut form).await.unwrap_err();

    assert!(matches!(err, CoreError::ValidationFailed { .. }));
    assert_eq!(form.specialty, "Fade");
    assert_eq!(
        current_message(&controller),
        ("Name is required".into(), NotificationKind::Error)
    );
}

#[tokio::test]
async fn registering_client_resets_form_and_reloads() {
    let (server, controller) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/clientes"))
        .and(body_json(json!({ "nombre": "Ana", "documento": "123", "telefono": "555" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    mount_list(&server, "barberos", json!([])).await;
    mount_list(
        &server,
        "clientes",
        json!([{ "id": 1, "nombre": "Ana", "documento": "123", "telefono": "555" }]),
    )
    .await;
    mount_list(&server, "citas", json!([])).await;

    let mut form = ClientForm {
        name: "Ana".into(),
        document: "123".into(),
        phone: "555".into(),
    };
    let result = controller.submit(&mut form).await.unwrap();

    assert!(result.reload.is_complete());
    assert_eq!(form, ClientForm::default());
    assert_eq!(controller.clients_snapshot().len(), 1);
    assert_eq!(
        current_message(&controller),
        ("Client registered".into(), NotificationKind::Success)
    );
}

#[tokio::test]
async fn rejected_client_keeps_form_and_skips_reload() {
    let (server, controller) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/clientes"))
        .respond_with(ResponseTemplate::new(409).set_body_string("duplicado"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = ClientForm {
        name: "Ana".into(),
        document: "123".into(),
        phone: "555".into(),
    };
    let err = controller.submit(&mut form).await.unwrap_err();

    assert!(matches!(err, CoreError::Conflict { .. }));
    assert_eq!(form.name, "Ana");
    assert_eq!(
        current_message(&controller),
        ("Document or phone already registered".into(), NotificationKind::Error)
    );
}

#[tokio::test]
async fn successful_write_reloads_every_collection() {
    let (server, controller) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/barberos"))
        .and(body_json(json!({ "nombre": "Luis", "especialidad": "", "telefono": "" })))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    for resource in ["barberos", "clientes", "citas"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/{resource}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut form = BarberForm {
        name: "Luis".into(),
        ..BarberForm::default()
    };
    controller.submit(&mut form).await.unwrap();

    assert_eq!(
        current_message(&controller),
        ("Barber created".into(), NotificationKind::Success)
    );
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let (server, controller) = setup().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = controller
        .delete_appointment(&EntityId::Numeric(7), None, &|_: &str| false)
        .await
        .unwrap();

    assert!(matches!(outcome, DeleteOutcome::Declined));
    assert!(controller.notification().is_none());
}

#[tokio::test]
async fn confirmed_delete_sends_reason_and_reloads() {
    let (server, controller) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/citas/7"))
        .and(query_param("motivo", "cliente enfermo"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    mount_empty_lists(&server).await;

    let outcome = controller
        .delete_appointment(
            &EntityId::Numeric(7),
            Some("cliente enfermo".into()),
            &|_: &str| true,
        )
        .await
        .unwrap();

    assert!(matches!(outcome, DeleteOutcome::Deleted(_)));
    assert_eq!(
        current_message(&controller),
        ("Appointment deleted".into(), NotificationKind::Success)
    );
}

#[tokio::test]
async fn failed_delete_notifies() {
    let (server, controller) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/citas/8"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = controller
        .delete_appointment(&EntityId::Numeric(8), None, &|_: &str| true)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CoreError::NotFound { ref entity_type, ref identifier }
            if entity_type == "appointment" && identifier == "8"
    ));
    assert_eq!(
        current_message(&controller),
        ("Failed to delete appointment".into(), NotificationKind::Error)
    );
}

// ── Ping ────────────────────────────────────────────────────────────

#[tokio::test]
async fn ping_returns_body() {
    let (server, controller) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/clientes/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("clientes-ok"))
        .mount(&server)
        .await;

    assert_eq!(controller.ping().await.unwrap(), "clientes-ok");
}

#[tokio::test]
async fn unreachable_service_is_connection_failure() {
    let url = "http://127.0.0.1:9/api".parse().unwrap();
    let controller = Controller::new(ServiceConfig::new(url)).unwrap();

    let err = controller.ping().await.unwrap_err();
    assert!(matches!(err, CoreError::ConnectionFailed { .. }));

    let report = controller.reload_all().await;
    assert_eq!(report.failed.len(), 3);
}

#[tokio::test]
async fn subscribers_see_reloaded_collections() {
    let (server, controller) = setup().await;
    mount_list(
        &server,
        "barberos",
        json!([
            { "id": 1, "nombre": "Luis", "activo": true },
            { "id": 2, "nombre": "Marta", "activo": true }
        ]),
    )
    .await;
    mount_list(&server, "clientes", json!([])).await;
    mount_list(&server, "citas", json!([])).await;

    let mut barbers = controller.barbers();
    assert!(barbers.snapshot().is_empty());

    controller.reload_all().await;

    assert!(barbers.has_changed());
    let names: Vec<String> = barbers.snapshot().iter().map(|b| b.name.clone()).collect();
    assert_eq!(names, vec!["Luis", "Marta"]);
}

#[tokio::test]
async fn view_selection_is_observable() {
    let (_server, controller) = setup().await;
    let mut views = controller.subscribe_view();
    assert_eq!(controller.active_view(), View::Dashboard);

    controller.select_view(View::Book);
    assert!(views.has_changed().unwrap());
    assert_eq!(*views.borrow_and_update(), View::Book);
    assert_eq!(controller.active_view(), View::Book);
}
