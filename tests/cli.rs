use assert_cmd::Command;
use httpmock::prelude::*;

#[test]
fn products_command_renders_the_table() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/productos");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"success": true, "productos": [
                    {"id": 1, "codigo": "P-1", "nombre": "Cable HDMI", "precio": "10.00",
                     "stock_actual": 0, "stock_minimo": 5}
                ], "total": 1}"#,
            );
    });

    Command::new(assert_cmd::cargo::cargo_bin!("inventario-panel"))
        .args(["--url", &server.base_url(), "products"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Cable HDMI"))
        .stdout(predicates::str::contains("Agotado"));
}

#[test]
fn health_command_reports_an_operational_system() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status": "ok", "database": "conectado", "timestamp": "2025-08-06T10:30:00.000000"}"#);
    });

    Command::new(assert_cmd::cargo::cargo_bin!("inventario-panel"))
        .args(["--url", &server.base_url(), "health"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Sistema Operativo"));
}

#[test]
fn unreachable_backend_still_renders_a_status_panel() {
    Command::new(assert_cmd::cargo::cargo_bin!("inventario-panel"))
        .args(["--url", "http://127.0.0.1:1", "health"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No se pudo conectar con el servidor"));
}

#[test]
fn add_product_without_required_fields_blocks_before_any_request() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/productos");
        then.status(201).body(r#"{"success": true}"#);
    });

    Command::new(assert_cmd::cargo::cargo_bin!("inventario-panel"))
        .args(["--url", &server.base_url(), "add-product", "--name", "Sin código"])
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "Por favor completa todos los campos requeridos",
        ));

    assert_eq!(create.hits(), 0);
}

#[test]
fn add_product_success_notifies_and_renders() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/productos");
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"success": true}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/productos");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success": true, "productos": [], "total": 0}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/categorias");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success": true, "categorias": [], "total": 0}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/alertas");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success": true, "alertas": [], "total": 0}"#);
    });

    Command::new(assert_cmd::cargo::cargo_bin!("inventario-panel"))
        .args([
            "--url",
            &server.base_url(),
            "add-product",
            "--code",
            "P-9",
            "--name",
            "Linterna",
            "--price",
            "8.25",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Producto creado exitosamente"));

    assert_eq!(create.hits(), 1);
}

#[test]
fn mark_read_command_hits_the_endpoint() {
    let server = MockServer::start();
    let mark = server.mock(|when, then| {
        when.method(PUT).path("/alertas/7/leer");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success": true, "mensaje": "Alerta marcada como leída"}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/alertas");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success": true, "alertas": [], "total": 0}"#);
    });

    Command::new(assert_cmd::cargo::cargo_bin!("inventario-panel"))
        .args(["--url", &server.base_url(), "mark-read", "7"])
        .assert()
        .success();

    assert_eq!(mark.hits(), 1);
}

#[test]
fn show_product_prints_the_plain_text_summary() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/productos");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"success": true, "productos": [
                    {"id": 1, "codigo": "P-1", "nombre": "Cable HDMI", "precio": "10.00",
                     "stock_actual": 3, "stock_minimo": 5, "imagen_url": "/uploads/cable.png"}
                ], "total": 1}"#,
            );
    });

    Command::new(assert_cmd::cargo::cargo_bin!("inventario-panel"))
        .args(["--url", &server.base_url(), "--origin", &server.base_url(), "show-product", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Producto: Cable HDMI"))
        .stdout(predicates::str::contains(format!(
            "Imagen: {}/uploads/cable.png",
            server.base_url()
        )));
}
