use maud::{html, Markup};

use crate::models::Category;

use super::format_date;
use super::products::NO_DESCRIPTION;

pub fn category_table(categories: &[Category]) -> Markup {
    if categories.is_empty() {
        return html! { p class="text-muted" { "No hay categorías registradas" } };
    }

    html! {
        div class="table-responsive" {
            table class="table table-hover" {
                thead {
                    tr {
                        th { "ID" }
                        th { "Nombre" }
                        th { "Descripción" }
                        th { "Fecha Creación" }
                    }
                }
                tbody {
                    @for category in categories {
                        tr {
                            td { strong { (category.id) } }
                            td { (category.name) }
                            td { (category.description.as_deref().unwrap_or(NO_DESCRIPTION)) }
                            td { (category.created_at.as_deref().map(format_date).unwrap_or_default()) }
                        }
                    }
                }
            }
        }
    }
}

/// `<option>` list for the product form select. The empty value is the
/// "no category" choice.
pub fn category_options(categories: &[Category], selected: &str) -> Markup {
    html! {
        option value="" { "Seleccionar categoría" }
        @for category in categories {
            option value=(category.id) selected[category.id.to_string() == selected] {
                (category.name)
            }
        }
    }
}
