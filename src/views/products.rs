use maud::{html, Markup};

use crate::forms::{FormMode, ProductForm};
use crate::models::{Category, Product};

use super::categories::category_options;

/// Server-relative prefix under which the backend stores uploaded images.
pub const UPLOAD_PREFIX: &str = "/uploads/";

pub const NO_CATEGORY: &str = "Sin categoría";
pub const NO_DESCRIPTION: &str = "Sin descripción";
pub const NO_IMAGE: &str = "Sin imagen";
pub const OUT_OF_STOCK: &str = "Agotado";

/// Uploaded images are addressed relative to the backend; anything else is
/// already absolute and passes through unchanged.
pub fn resolve_image_url(url: &str, origin: &str) -> String {
    if url.starts_with(UPLOAD_PREFIX) {
        format!("{origin}{url}")
    } else {
        url.to_string()
    }
}

pub fn product_table(products: &[Product], origin: &str) -> Markup {
    if products.is_empty() {
        return html! { p class="text-muted" { "No hay productos registrados" } };
    }

    html! {
        div class="table-responsive" {
            table class="table table-hover" {
                thead {
                    tr {
                        th { "Imagen" }
                        th { "Código" }
                        th { "Nombre" }
                        th { "Categoría" }
                        th { "Precio" }
                        th { "Stock" }
                        th { "Estado" }
                    }
                }
                tbody {
                    @for product in products {
                        (product_row(product, origin))
                    }
                }
            }
        }
    }
}

fn product_row(product: &Product, origin: &str) -> Markup {
    let stock_class = if product.is_low_stock() {
        "stock-bajo"
    } else {
        "stock-normal"
    };

    html! {
        tr {
            td class="text-center" { (image_cell(product, origin)) }
            td { strong { (product.code) } }
            td { (product.name) }
            td {
                span class="badge bg-secondary" {
                    (product.category_name.as_deref().unwrap_or(NO_CATEGORY))
                }
            }
            td { (format!("${:.2}", product.price)) }
            td class=(stock_class) {
                @if product.is_out_of_stock() { (OUT_OF_STOCK) } @else { (product.stock) }
            }
            td { (stock_badge(product)) }
        }
    }
}

fn stock_badge(product: &Product) -> Markup {
    if product.is_out_of_stock() {
        html! { span class="stock-agotado" { (OUT_OF_STOCK) } }
    } else if product.is_low_stock() {
        html! { span class="badge bg-warning" { "Stock Bajo" } }
    } else {
        html! { span class="badge bg-success" { "Normal" } }
    }
}

fn image_cell(product: &Product, origin: &str) -> Markup {
    match product.image_ref() {
        Some(url) => {
            let src = resolve_image_url(url, origin);
            html! { img src=(src) alt=(product.name) class="producto-imagen"; }
        }
        None => html! {
            div class="producto-sin-imagen" { small { (NO_IMAGE) } }
        },
    }
}

/// Plain-text summary of a cached product, same sentinel rules as the
/// table render.
pub fn product_detail(product: &Product, origin: &str) -> String {
    let image = product
        .image_ref()
        .map(|url| resolve_image_url(url, origin))
        .unwrap_or_else(|| "No disponible".to_string());

    format!(
        "Producto: {}\nCódigo: {}\nPrecio: ${:.2}\nStock: {}\nCategoría: {}\nDescripción: {}\nImagen: {}",
        product.name,
        product.code,
        product.price,
        product.stock,
        product.category_name.as_deref().unwrap_or(NO_CATEGORY),
        product.description.as_deref().unwrap_or(NO_DESCRIPTION),
        image,
    )
}

/// Create/edit modal. Values come from the form state, so an edit shows
/// the product being changed and a fresh form shows blanks.
pub fn product_form_modal(form: &ProductForm, mode: FormMode, categories: &[Category]) -> Markup {
    let title = match mode {
        FormMode::Create => "Nuevo Producto",
        FormMode::Edit(_) => "Editar Producto",
    };

    html! {
        div class="modal" id="producto-modal" {
            div class="modal-dialog" {
                div class="modal-content" {
                    div class="modal-header" {
                        h5 class="modal-title" { (title) }
                    }
                    div class="modal-body" {
                        form id="producto-form" {
                            div class="mb-3" {
                                label for="codigo" { "Código *" }
                                input type="text" name="codigo" id="codigo" class="form-control" value=(form.code) required;
                            }
                            div class="mb-3" {
                                label for="nombre" { "Nombre *" }
                                input type="text" name="nombre" id="nombre" class="form-control" value=(form.name) required;
                            }
                            div class="mb-3" {
                                label for="descripcion" { "Descripción" }
                                textarea name="descripcion" id="descripcion" class="form-control" { (form.description) }
                            }
                            div class="mb-3" {
                                label for="precio" { "Precio *" }
                                input type="number" step="0.01" name="precio" id="precio" class="form-control" value=(form.price) required;
                            }
                            div class="mb-3" {
                                label for="stock_actual" { "Stock actual" }
                                input type="number" name="stock_actual" id="stock_actual" class="form-control" value=(form.stock);
                            }
                            div class="mb-3" {
                                label for="stock_minimo" { "Stock mínimo" }
                                input type="number" name="stock_minimo" id="stock_minimo" class="form-control" value=(form.min_stock);
                            }
                            div class="mb-3" {
                                label for="categoria_id" { "Categoría" }
                                select name="categoria_id" id="categoria_id" class="form-select" {
                                    (category_options(categories, form.category_id.as_str()))
                                }
                            }
                            div class="mb-3" {
                                label for="imagen_url" { "URL de imagen" }
                                input type="url" name="imagen_url" id="imagen_url" class="form-control" value=(form.image_url);
                            }
                            div class="mb-3" {
                                label for="imagen_archivo" { "Archivo de imagen (máx. 5MB)" }
                                input type="file" name="imagen_archivo" id="imagen_archivo" class="form-control";
                            }
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

    fn product(stock: i32, min_stock: i32) -> Product {
        Product {
            id: 1,
            code: "P-1".to_string(),
            name: "Cable HDMI".to_string(),
            description: None,
            price: 10.0,
            stock,
            min_stock,
            category_id: None,
            category_name: None,
            image_url: None,
        }
    }

    #[test]
    fn uploaded_paths_gain_the_server_origin() {
        assert_eq!(
            resolve_image_url("/uploads/foto.png", "http://localhost:5000"),
            "http://localhost:5000/uploads/foto.png"
        );
        assert_eq!(
            resolve_image_url("https://cdn.example.com/foto.png", "http://localhost:5000"),
            "https://cdn.example.com/foto.png"
        );
    }

    #[test]
    fn out_of_stock_renders_the_sentinel() {
        let html = product_table(&[product(0, 5)], "http://localhost:5000").into_string();
        assert!(html.contains(OUT_OF_STOCK));
        assert!(html.contains("stock-bajo"));
    }

    #[test]
    fn missing_category_and_image_render_sentinels() {
        let html = product_table(&[product(9, 5)], "http://localhost:5000").into_string();
        assert!(html.contains(NO_CATEGORY));
        assert!(html.contains(NO_IMAGE));
        assert!(html.contains("stock-normal"));
    }

    #[test]
    fn empty_list_renders_fallback() {
        let html = product_table(&[], "http://localhost:5000").into_string();
        assert!(html.contains("No hay productos registrados"));
    }

    #[test]
    fn untrusted_names_are_escaped() {
        let mut hostile = product(1, 5);
        hostile.name = "<script>alert(1)</script>".to_string();
        let html = product_table(&[hostile], "http://localhost:5000").into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn detail_uses_sentinels_and_rewrites_image() {
        let mut p = product(3, 5);
        p.image_url = Some("/uploads/cable.png".to_string());
        let detail = product_detail(&p, "http://localhost:5000");
        assert!(detail.contains("Imagen: http://localhost:5000/uploads/cable.png"));
        assert!(detail.contains(NO_CATEGORY));
        assert!(detail.contains(NO_DESCRIPTION));
    }
}
