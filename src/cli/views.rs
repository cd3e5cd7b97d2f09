use std::error::Error;
use std::sync::Arc;

use tokio::task::JoinHandle;

use super::presenter::{AssumeYes, StdinConfirm, render_form, render_list, spawn_presenter};
use crate::client::{HttpItemsClient, ItemsClient};
use crate::config::AppSettings;
use crate::types::internal::ItemField;
use crate::ui::{
    Confirm, DeleteOutcome, FormState, ItemFormFields, ItemFormView, ListView, Notifier, Route,
    SubmitOutcome,
};

/// Field values given on the command line for `edit`
#[derive(Debug, Clone, Default)]
pub struct FieldOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
}

impl FieldOverrides {
    fn apply(self, view: &mut ItemFormView) {
        let overrides = [
            (ItemField::Name, self.name),
            (ItemField::Description, self.description),
            (ItemField::Category, self.category),
            (ItemField::Price, self.price),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                view.set_field(field, value);
            }
        }
    }
}

/// The views wired to a client and a stderr notification presenter
pub struct Frontend {
    client: Arc<dyn ItemsClient>,
    notifier: Notifier,
    presenter: JoinHandle<()>,
}

impl Frontend {
    /// Front end talking to the server at `settings.api_url`
    pub fn connect(settings: &AppSettings) -> Result<Self, Box<dyn Error>> {
        let client = HttpItemsClient::new(&settings.api_url)?;
        Ok(Self::with_client(Arc::new(client), settings.notification_timeout))
    }

    pub fn with_client(client: Arc<dyn ItemsClient>, notification_timeout: std::time::Duration) -> Self {
        let (notifier, receiver) = Notifier::channel(notification_timeout);
        Self {
            client,
            notifier,
            presenter: spawn_presenter(receiver),
        }
    }

    /// Wait for pending notifications to be shown
    pub async fn shutdown(self) {
        drop(self.notifier);
        if let Err(e) = self.presenter.await {
            tracing::warn!("Notification presenter stopped: {}", e);
        }
    }

    /// Shut down, passing the command result through
    pub async fn finish<T>(self, result: T) -> T {
        self.shutdown().await;
        result
    }

    pub async fn list(&self, search: Option<&str>) -> Result<(), Box<dyn Error>> {
        let mut view = ListView::new(self.client.clone(), self.notifier.clone());
        view.mount().await;
        if let Some(term) = search {
            view.set_search(term);
        }

        print!("{}", render_list(&view));

        match view.error() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    pub async fn add(&self, fields: ItemFormFields) -> Result<(), Box<dyn Error>> {
        let mut view = ItemFormView::create(self.client.clone(), self.notifier.clone());
        for field in ItemField::ALL {
            view.set_field(field, fields.get(field));
        }

        self.finish_form(view).await
    }

    pub async fn edit(&self, id: &str, overrides: FieldOverrides) -> Result<(), Box<dyn Error>> {
        let mut view = ItemFormView::edit(self.client.clone(), self.notifier.clone(), id);
        view.mount().await;

        if view.state() == FormState::LoadFailed {
            print!("{}", render_form(&view));
            return Err(view.error().unwrap_or_default().into());
        }

        overrides.apply(&mut view);

        self.finish_form(view).await
    }

    async fn finish_form(&self, mut view: ItemFormView) -> Result<(), Box<dyn Error>> {
        match view.submit().await {
            SubmitOutcome::Navigate(route) => self.navigate(&route).await,
            SubmitOutcome::Invalid => {
                print!("{}", render_form(&view));
                Err("Validation failed".into())
            }
            SubmitOutcome::Failed | SubmitOutcome::Ignored => {
                print!("{}", render_form(&view));
                Err(view.error().unwrap_or("Submission failed").into())
            }
        }
    }

    pub async fn delete(&self, id: &str, assume_yes: bool) -> Result<(), Box<dyn Error>> {
        let mut view = ListView::new(self.client.clone(), self.notifier.clone());
        view.mount().await;
        if let Some(error) = view.error() {
            return Err(error.into());
        }

        let confirm: &dyn Confirm = if assume_yes { &AssumeYes } else { &StdinConfirm };

        match view.delete(id, confirm).await {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::Cancelled => {
                println!("❌ Deletion cancelled.");
                Ok(())
            }
            DeleteOutcome::Failed => Err(view.error().unwrap_or_default().into()),
        }
    }

    /// Show the view mounted for `path`
    pub async fn open(&self, path: &str) -> Result<(), Box<dyn Error>> {
        let route = Route::parse(path).ok_or_else(|| format!("Unknown route: {}", path))?;

        println!("{} → {}", route, route.view_name());

        self.navigate(&route).await
    }

    async fn navigate(&self, route: &Route) -> Result<(), Box<dyn Error>> {
        match route {
            Route::List => self.list(None).await,
            Route::Add => {
                let view = ItemFormView::create(self.client.clone(), self.notifier.clone());
                print!("{}", render_form(&view));
                Ok(())
            }
            Route::Edit(id) => {
                let mut view = ItemFormView::edit(self.client.clone(), self.notifier.clone(), id);
                view.mount().await;
                print!("{}", render_form(&view));
                match view.error() {
                    Some(error) => Err(error.into()),
                    None => Ok(()),
                }
            }
        }
    }
}
