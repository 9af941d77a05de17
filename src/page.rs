use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::notify::Notification;

/// Navigable page sections. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Products,
    Categories,
    Alerts,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Products,
        Section::Categories,
        Section::Alerts,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Products => "productos",
            Section::Categories => "categorias",
            Section::Alerts => "alertas",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Products => "Productos",
            Section::Categories => "Categorías",
            Section::Alerts => "Alertas",
        }
    }

    /// Whether entering the section must refresh its data. The dashboard
    /// only loads on startup.
    pub fn requires_load(&self) -> bool {
        !matches!(self, Section::Dashboard)
    }
}

/// Rendered page state: the active section plus the latest fragment for
/// every container.
#[derive(Debug, Clone)]
pub struct Page {
    active: Section,
    modal_open: bool,
    system_status: String,
    stats: String,
    recent_alerts: String,
    product_list: String,
    category_list: String,
    alert_list: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            active: Section::Dashboard,
            modal_open: false,
            system_status: String::new(),
            stats: String::new(),
            recent_alerts: String::new(),
            product_list: String::new(),
            category_list: String::new(),
            alert_list: String::new(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }

    /// Hide every section, show the target, and report whether the caller
    /// must load fresh data for it.
    pub fn navigate(&mut self, target: Section) -> bool {
        self.active = target;
        target.requires_load()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn set_system_status(&mut self, fragment: Markup) {
        self.system_status = fragment.into_string();
    }

    pub fn set_stats(&mut self, fragment: Markup) {
        self.stats = fragment.into_string();
    }

    pub fn set_recent_alerts(&mut self, fragment: Markup) {
        self.recent_alerts = fragment.into_string();
    }

    pub fn set_product_list(&mut self, fragment: Markup) {
        self.product_list = fragment.into_string();
    }

    pub fn set_category_list(&mut self, fragment: Markup) {
        self.category_list = fragment.into_string();
    }

    pub fn set_alert_list(&mut self, fragment: Markup) {
        self.alert_list = fragment.into_string();
    }

    fn display(&self, section: Section) -> &'static str {
        if self.is_visible(section) {
            "display: block"
        } else {
            "display: none"
        }
    }

    fn nav_bar(&self) -> Markup {
        html! {
            nav class="navbar navbar-expand-lg" {
                span class="navbar-brand" { "Inventario Inteligente" }
                ul class="navbar-nav" {
                    @for section in Section::ALL {
                        li class="nav-item" {
                            a class=(if self.is_visible(section) { "nav-link active" } else { "nav-link" })
                                href=(format!("#{}", section.slug())) {
                                (section.title())
                            }
                        }
                    }
                }
            }
        }
    }

    /// Assemble the whole document. The stylesheet and behavior come from
    /// the hosting environment; this only emits structure.
    pub fn render(&self, modal: Option<Markup>, notifications: &[Notification]) -> String {
        html! {
            (DOCTYPE)
            html lang="es" {
                head {
                    meta charset="utf-8";
                    title { "Sistema de Gestión de Inventario" }
                    link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
                }
                body {
                    (self.nav_bar())
                    @for notification in notifications {
                        div class=(notification.kind.css_class()) { (notification.message) }
                    }
                    main class="container" {
                        section id=(Section::Dashboard.slug()) style=(self.display(Section::Dashboard)) {
                            (PreEscaped(&self.stats))
                            div id="system-status" { (PreEscaped(&self.system_status)) }
                            div id="alertas-recientes" { (PreEscaped(&self.recent_alerts)) }
                        }
                        section id=(Section::Products.slug()) style=(self.display(Section::Products)) {
                            div id="lista-productos" { (PreEscaped(&self.product_list)) }
                        }
                        section id=(Section::Categories.slug()) style=(self.display(Section::Categories)) {
                            div id="lista-categorias" { (PreEscaped(&self.category_list)) }
                        }
                        section id=(Section::Alerts.slug()) style=(self.display(Section::Alerts)) {
                            div id="lista-alertas" { (PreEscaped(&self.alert_list)) }
                        }
                    }
                    @if let Some(modal) = modal {
                        (modal)
                    }
                }
            }
        }
        .into_string()
    }
}
