use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::forms::{FormMode, ProductForm};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::page::{Page, Section};
use crate::state::ClientState;
use crate::views;
use crate::views::dashboard::{DashboardStats, SystemStatus};

const CONNECTION_ERROR: &str = "Error de conexión";

/// Orchestrating controller: owns the API clients, the cached snapshot,
/// the page state and the shared product form.
pub struct App {
    api: ApiClient,
    config: Config,
    state: ClientState,
    page: Page,
    form: ProductForm,
    form_mode: FormMode,
    notifier: Notifier,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            api: ApiClient::new(&config.api_base_url),
            notifier: Notifier::new(Duration::from_secs(config.notification_ttl_secs)),
            state: ClientState::new(),
            page: Page::new(),
            form: ProductForm::default(),
            form_mode: FormMode::Create,
            config,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn form_mode(&self) -> FormMode {
        self.form_mode
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifier.active()
    }

    pub fn render(&self) -> String {
        let modal = self.page.modal_open().then(|| {
            views::products::product_form_modal(&self.form, self.form_mode, self.state.categories())
        });
        self.page.render(modal, &self.notifier.active())
    }

    /// One-shot health check; always leaves a status panel behind, even
    /// when the backend is unreachable.
    pub async fn check_system_status(&mut self) {
        let status = match self.api.health.check().await {
            Ok(health) if health.is_healthy() => SystemStatus::Healthy {
                checked_at: Local::now().format("%H:%M:%S").to_string(),
            },
            Ok(health) => SystemStatus::Degraded {
                database: health.database,
            },
            Err(err) => {
                tracing::error!(error = %err, "error verificando estado del sistema");
                SystemStatus::Unreachable
            }
        };
        self.page
            .set_system_status(views::dashboard::system_status(&status));
    }

    /// Load everything the dashboard needs with three concurrent fetches.
    /// A transport failure on any of them aborts the whole load; an
    /// unsuccessful envelope only skips its own fragment.
    pub async fn load_dashboard(&mut self) -> AppResult<()> {
        let (products_env, categories_env, alerts_env) = tokio::try_join!(
            self.api.products.list_envelope(),
            self.api.categories.list_envelope(),
            self.api.alerts.list_envelope(),
        )
        .map_err(|err| {
            tracing::error!(error = %err, "error cargando dashboard");
            err
        })?;

        if products_env.success && categories_env.success {
            self.state.set_products(products_env.products);
            self.state.set_categories(categories_env.categories);
            self.refresh_stats();
        }

        if alerts_env.success {
            self.page
                .set_recent_alerts(views::alerts::recent_alerts(&alerts_env.alerts));
        }

        Ok(())
    }

    fn refresh_stats(&mut self) {
        let stats = DashboardStats::from_state(&self.state);
        self.page.set_stats(views::dashboard::stat_cards(&stats));
    }

    pub async fn load_products(&mut self) -> AppResult<()> {
        match self.api.products.list().await {
            Ok(products) => {
                self.state.set_products(products);
                self.page.set_product_list(views::products::product_table(
                    self.state.products(),
                    &self.config.server_origin,
                ));
                Ok(())
            }
            Err(err) => Err(self.report_load_error(err, "Error cargando productos")),
        }
    }

    pub async fn load_categories(&mut self) -> AppResult<()> {
        match self.api.categories.list().await {
            Ok(categories) => {
                self.state.set_categories(categories);
                self.page
                    .set_category_list(views::categories::category_table(self.state.categories()));
                Ok(())
            }
            Err(err) => Err(self.report_load_error(err, "Error cargando categorías")),
        }
    }

    /// Alerts are rendered straight from the response, never cached.
    pub async fn load_alerts(&mut self) -> AppResult<()> {
        match self.api.alerts.list().await {
            Ok(alerts) => {
                self.page.set_alert_list(views::alerts::alert_list(&alerts));
                Ok(())
            }
            Err(err) => Err(self.report_load_error(err, "Error cargando alertas")),
        }
    }

    fn report_load_error(&self, err: AppError, fallback: &str) -> AppError {
        tracing::error!(error = %err, "{}", fallback);
        let message = match &err {
            AppError::Transport(_) => CONNECTION_ERROR,
            _ => fallback,
        };
        self.notifier.push(NotificationKind::Error, message);
        err
    }

    /// Mark an alert as read, then refresh the recent-alerts fragment.
    pub async fn mark_alert_read(&mut self, id: i64) -> AppResult<()> {
        let result: AppResult<()> = async {
            self.api.alerts.mark_read(id).await?;
            let alerts = self.api.alerts.list().await?;
            self.page.set_recent_alerts(views::alerts::recent_alerts(&alerts));
            Ok(())
        }
        .await;

        if let Err(err) = &result {
            tracing::error!(error = %err, "error marcando alerta como leída");
        }
        result
    }

    /// Section transition; loads fresh data when the target needs it.
    pub async fn navigate(&mut self, target: Section) -> AppResult<()> {
        if self.page.navigate(target) {
            match target {
                Section::Products => self.load_products().await?,
                Section::Categories => self.load_categories().await?,
                Section::Alerts => self.load_alerts().await?,
                Section::Dashboard => {}
            }
        }
        Ok(())
    }

    /// Fresh create form.
    pub fn open_product_form(&mut self) {
        self.form = ProductForm::default();
        self.form_mode = FormMode::Create;
        self.page.open_modal();
    }

    /// Pre-fill the form from the cached product and switch to edit mode.
    pub fn edit_product(&mut self, id: i64) -> AppResult<()> {
        let product = self
            .state
            .product(id)
            .ok_or(AppError::ProductNotFound(id))?;
        self.form = ProductForm::from_product(product);
        self.form_mode = FormMode::Edit(id);
        self.page.open_modal();
        Ok(())
    }

    pub fn attach_image_file(&mut self, path: impl Into<PathBuf>) -> AppResult<()> {
        self.form.attach_image_file(path)
    }

    pub fn product_detail(&self, id: i64) -> AppResult<String> {
        let product = self
            .state
            .product(id)
            .ok_or(AppError::ProductNotFound(id))?;
        Ok(views::products::product_detail(
            product,
            &self.config.server_origin,
        ))
    }

    /// Submit the form: validation gates the request, the attached file
    /// picks the body shape, and the mode picks the endpoint. On success
    /// the modal closes, the mode reverts to create, and both the product
    /// list and the dashboard refresh.
    pub async fn save_product(&mut self) -> AppResult<()> {
        self.form.validate()?;

        let result = if self.form.has_image_file() {
            let body = self.form.multipart_body().await?;
            match self.form_mode {
                FormMode::Create => self.api.products.create_multipart(body).await,
                FormMode::Edit(id) => self.api.products.update_multipart(id, body).await,
            }
        } else {
            let payload = self.form.json_payload();
            match self.form_mode {
                FormMode::Create => self.api.products.create_json(&payload).await,
                FormMode::Edit(id) => self.api.products.update_json(id, &payload).await,
            }
        };

        match result {
            Ok(_) => {
                let message = match self.form_mode {
                    FormMode::Create => "Producto creado exitosamente",
                    FormMode::Edit(_) => "Producto actualizado exitosamente",
                };
                self.page.close_modal();
                self.form_mode = FormMode::Create;
                self.notifier.push(NotificationKind::Success, message);

                self.load_products().await.ok();
                self.load_dashboard().await.ok();
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error guardando producto");
                let message = match &err {
                    AppError::Transport(_) => CONNECTION_ERROR.to_string(),
                    AppError::Api(msg) => msg.clone(),
                    other => other.to_string(),
                };
                self.notifier.push(NotificationKind::Error, message);
                Err(err)
            }
        }
    }
}
