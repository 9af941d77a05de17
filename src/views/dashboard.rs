use maud::{html, Markup};

use crate::state::ClientState;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub total_categories: usize,
    pub inventory_value: f64,
}

impl DashboardStats {
    pub fn from_state(state: &ClientState) -> Self {
        Self {
            total_products: state.products().len(),
            low_stock: state.low_stock_count(),
            total_categories: state.categories().len(),
            inventory_value: state.inventory_value(),
        }
    }

    pub fn formatted_value(&self) -> String {
        format!("${:.2}", self.inventory_value)
    }
}

pub fn stat_cards(stats: &DashboardStats) -> Markup {
    html! {
        div class="row" {
            div class="col-md-3" {
                div class="card text-center" {
                    div class="card-body" {
                        h3 id="total-productos" { (stats.total_products) }
                        p class="text-muted" { "Productos" }
                    }
                }
            }
            div class="col-md-3" {
                div class="card text-center" {
                    div class="card-body" {
                        h3 id="stock-bajo" { (stats.low_stock) }
                        p class="text-muted" { "Stock Bajo" }
                    }
                }
            }
            div class="col-md-3" {
                div class="card text-center" {
                    div class="card-body" {
                        h3 id="total-categorias" { (stats.total_categories) }
                        p class="text-muted" { "Categorías" }
                    }
                }
            }
            div class="col-md-3" {
                div class="card text-center" {
                    div class="card-body" {
                        h3 id="valor-inventario" { (stats.formatted_value()) }
                        p class="text-muted" { "Valor Inventario" }
                    }
                }
            }
        }
    }
}

/// Outcome of the one-shot health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemStatus {
    Healthy { checked_at: String },
    Degraded { database: String },
    Unreachable,
}

pub fn system_status(status: &SystemStatus) -> Markup {
    match status {
        SystemStatus::Healthy { checked_at } => html! {
            div class="alert alert-success" {
                strong { "Sistema Operativo" }
                br;
                small { "Base de datos: Conectada" }
                br;
                small { "Última verificación: " (checked_at) }
            }
        },
        SystemStatus::Degraded { database } => html! {
            div class="alert alert-danger" {
                strong { "Error del Sistema" }
                br;
                small { "Estado: " (database) }
            }
        },
        SystemStatus::Unreachable => html! {
            div class="alert alert-danger" {
                strong { "Error de Conexión" }
                br;
                small { "No se pudo conectar con el servidor" }
            }
        },
    }
}
