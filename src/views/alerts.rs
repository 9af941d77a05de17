use maud::{html, Markup};

use crate::models::{Alert, AlertKind};

use super::format_timestamp;

/// The dashboard card shows this many alerts plus an overflow count.
pub const RECENT_LIMIT: usize = 5;

fn badge_color(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::OutOfStock => "danger",
        AlertKind::LowStock => "warning",
    }
}

fn raised_at(alert: &Alert) -> String {
    alert
        .raised_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default()
}

pub fn recent_alerts(alerts: &[Alert]) -> Markup {
    if alerts.is_empty() {
        return html! { p class="text-muted" { "No hay alertas recientes" } };
    }

    html! {
        div class="list-group list-group-flush" {
            @for alert in alerts.iter().take(RECENT_LIMIT) {
                div class=(if alert.read { "list-group-item opacity-50" } else { "list-group-item" }) {
                    div class="fw-bold" { (alert.product_name) }
                    small class="text-muted" { (alert.message) }
                    br;
                    small class="text-muted" { (raised_at(alert)) }
                    @if alert.read {
                        span class="badge bg-success" { "Leída" }
                    } @else {
                        button class="btn btn-sm btn-outline-secondary" data-alert-id=(alert.id) {
                            "Marcar como leída"
                        }
                    }
                }
            }
            @if alerts.len() > RECENT_LIMIT {
                div class="list-group-item text-center" {
                    small class="text-muted" {
                        "Y " (alerts.len() - RECENT_LIMIT) " alertas más..."
                    }
                }
            }
        }
    }
}

pub fn alert_list(alerts: &[Alert]) -> Markup {
    if alerts.is_empty() {
        return html! {
            div class="text-center py-4" {
                h5 class="text-muted" { "¡Excelente!" }
                p class="text-muted" { "No hay alertas pendientes. Tu inventario está en buen estado." }
            }
        };
    }

    html! {
        div class="list-group" {
            @for alert in alerts {
                div class=(if alert.read { "list-group-item opacity-75" } else { "list-group-item" }) {
                    div class="d-flex align-items-center mb-2" {
                        span class=(format!("badge bg-{} me-2", badge_color(alert.kind))) {
                            (alert.kind.label())
                        }
                        h6 class="mb-0" { (alert.product_name) }
                        small class="text-muted ms-2" { "(" (alert.product_code) ")" }
                    }
                    p class="mb-1" { (alert.message) }
                    small class="text-muted" { (raised_at(alert)) }
                    @if alert.read {
                        span class="badge bg-success" { "Leída" }
                    } @else {
                        button class="btn btn-sm btn-outline-success" data-alert-id=(alert.id) {
                            "Leída"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: i64, kind: AlertKind, read: bool) -> Alert {
        Alert {
            id,
            product_id: id,
            kind,
            message: format!("Stock bajo: Producto {id}"),
            raised_at: Some("2025-08-01 09:00:00".to_string()),
            read,
            product_name: format!("Producto {id}"),
            product_code: format!("P-{id}"),
        }
    }

    #[test]
    fn recent_shows_at_most_five_plus_overflow() {
        let alerts: Vec<Alert> = (1..=7)
            .map(|id| alert(id, AlertKind::LowStock, false))
            .collect();
        let html = recent_alerts(&alerts).into_string();

        assert_eq!(html.matches("list-group-item").count(), 6); // 5 entries + overflow row
        assert!(html.contains("Y 2 alertas más..."));
    }

    #[test]
    fn exactly_five_has_no_overflow_row() {
        let alerts: Vec<Alert> = (1..=5)
            .map(|id| alert(id, AlertKind::LowStock, false))
            .collect();
        let html = recent_alerts(&alerts).into_string();
        assert!(!html.contains("alertas más"));
    }

    #[test]
    fn empty_lists_render_fallbacks() {
        assert!(recent_alerts(&[]).into_string().contains("No hay alertas recientes"));
        assert!(alert_list(&[]).into_string().contains("¡Excelente!"));
    }

    #[test]
    fn kinds_map_to_labels_and_colors() {
        let html = alert_list(&[
            alert(1, AlertKind::OutOfStock, false),
            alert(2, AlertKind::LowStock, true),
        ])
        .into_string();
        assert!(html.contains("bg-danger"));
        assert!(html.contains("Stock Agotado"));
        assert!(html.contains("bg-warning"));
        assert!(html.contains("opacity-75"));
        assert!(html.contains("Leída"));
    }

    #[test]
    fn alert_messages_are_escaped() {
        let mut hostile = alert(1, AlertKind::LowStock, false);
        hostile.message = "<img onerror=x>".to_string();
        let html = alert_list(&[hostile]).into_string();
        assert!(!html.contains("<img onerror"));
    }
}
