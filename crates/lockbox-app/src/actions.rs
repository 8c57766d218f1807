//! Action handlers: UpdateAction dispatch and background task spawning

use std::process::{Child, Command};

use lockbox_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;
use crate::timers::TimerRegistry;
use crate::UpdateAction;

/// Execute an action against the timer registry or by spawning a task
pub fn handle_action(
    action: UpdateAction,
    timers: &mut TimerRegistry,
    msg_tx: &mpsc::Sender<Message>,
) {
    match action {
        UpdateAction::ScheduleOnce {
            key,
            after,
            message,
        } => {
            debug!("Scheduling {:?} in {:?}", key, after);
            timers.schedule_once(key, after, message, msg_tx.clone());
        }

        UpdateAction::ScheduleRepeating {
            key,
            every,
            message,
        } => {
            debug!("Scheduling {:?} every {:?}", key, every);
            timers.schedule_repeating(key, every, message, msg_tx.clone());
        }

        UpdateAction::CancelTimer(key) => {
            if timers.cancel(key) {
                debug!("Cancelled {:?}", key);
            }
        }

        UpdateAction::CancelAllTimers => {
            debug!("Cancelling {} timers", timers.len());
            timers.cancel_all();
        }

        UpdateAction::OpenExternal { url, browser } => {
            let msg_tx = msg_tx.clone();
            tokio::spawn(async move {
                let opened = tokio::task::spawn_blocking({
                    let url = url.clone();
                    move || open_url_in_browser(&url, &browser)
                })
                .await;

                let reason = match opened {
                    Ok(Ok(())) => return,
                    Ok(Err(Error::OpenExternal { reason, .. })) => reason,
                    Ok(Err(e)) => e.to_string(),
                    Err(e) => e.to_string(),
                };
                warn!("Failed to open {}: {}", url, reason);
                let _ = msg_tx
                    .send(Message::OpenExternalFailed { url, reason })
                    .await;
            });
        }
    }
}

/// Open `url` with `browser`, or the platform default opener when empty
pub fn open_url_in_browser(url: &str, browser: &str) -> Result<()> {
    let spawned = if browser.is_empty() {
        platform_opener(url)
    } else {
        Command::new(browser).arg(url).spawn()
    };
    spawned
        .map(|_| ())
        .map_err(|e| Error::open_external(url, e.to_string()))
}

#[cfg(target_os = "macos")]
fn platform_opener(url: &str) -> std::io::Result<Child> {
    Command::new("open").arg(url).spawn()
}

#[cfg(target_os = "linux")]
fn platform_opener(url: &str) -> std::io::Result<Child> {
    Command::new("xdg-open").arg(url).spawn()
}

#[cfg(target_os = "windows")]
fn platform_opener(url: &str) -> std::io::Result<Child> {
    Command::new("cmd").args(["/C", "start", "", url]).spawn()
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn platform_opener(_url: &str) -> std::io::Result<Child> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no browser opener available for this platform",
    ))
}
