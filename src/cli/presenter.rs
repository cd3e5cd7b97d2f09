// Terminal rendering for the views and notifications

use std::io::{self, Write};

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::types::internal::ItemField;
use crate::ui::list_view::format_price;
use crate::ui::{Confirm, ItemFormView, ListView, NotificationKind, NotificationReceiver};

/// Print notifications to stderr as they arrive, dismissing each once shown
///
/// The task ends when every `Notifier` has been dropped.
pub fn spawn_presenter(mut receiver: NotificationReceiver) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(pending) = receiver.recv().await {
            let notification = pending.notification();
            match notification.kind {
                NotificationKind::Success => eprintln!("✅ {}", notification.message),
                NotificationKind::Error => eprintln!("❌ {}", notification.message),
            }
            pending.dismiss();
        }
    })
}

/// Confirmation read from stdin; only `yes` confirms
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            print!("⚠️  {} (yes/no): ", prompt);
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            Ok(input)
        })
        .await;

        match answer {
            Ok(Ok(input)) => input.trim().eq_ignore_ascii_case("yes"),
            Ok(Err(e)) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
            Err(e) => {
                tracing::warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }
}

/// Answers every prompt with yes
pub struct AssumeYes;

#[async_trait]
impl Confirm for AssumeYes {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// The list view as a table
pub fn render_list(view: &ListView) -> String {
    let mut out = String::from("Items\n");

    if let Some(error) = view.error() {
        out.push_str(&format!("❌ {}\n", error));
    }

    if let Some(empty) = view.empty_state() {
        out.push_str(&format!("{} Add one with `catalog add`.\n", empty));
        return out;
    }

    out.push_str(&format!(
        "{:<36}  {:<20}  {:<30}  {:<15}  {:>12}\n",
        "ID", "Name", "Description", "Category", "Price"
    ));
    for item in view.visible_items() {
        out.push_str(&format!(
            "{:<36}  {:<20}  {:<30}  {:<15}  {:>12}\n",
            item.id,
            item.name,
            item.description,
            item.category,
            format_price(item.price)
        ));
    }
    out
}

/// The form with its field values, field errors and page-level error
pub fn render_form(view: &ItemFormView) -> String {
    let mut out = format!("{}\n", view.title());

    if let Some(error) = view.error() {
        out.push_str(&format!("❌ {}\n", error));
    }

    for field in ItemField::ALL {
        out.push_str(&format!(
            "   {:<12} {}\n",
            format!("{}:", field.label()),
            view.fields().get(field)
        ));
        if let Some(message) = view.field_error(field) {
            out.push_str(&format!("      ⚠️  {}\n", message));
        }
    }
    out
}
