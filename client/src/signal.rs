use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use tracing::{error, info};

/// Starts a background thread that waits for SIGINT or SIGTERM and then sends a single stop
/// message. If the handlers can't be installed the receiver simply never fires, and the signals
/// keep their default behavior.
pub fn spawn_listener() -> Receiver<()> {
    let (stop_sender, stop_receiver) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("signal-listener".to_owned())
        .spawn(move || listen(stop_sender));

    if let Err(err) = spawned {
        error!(?err, "Couldn't start the signal listener thread");
    }

    stop_receiver
}

fn listen(stop_sender: Sender<()>) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(?err, "Couldn't build the signal listener runtime");
            return;
        }
    };

    match runtime.block_on(wait_for_termination()) {
        Ok(signal_name) => {
            info!(signal = signal_name, "Received termination signal");
            // The simulation may already be gone, in which case there's nobody left to tell.
            let _ = stop_sender.send(());
        }
        Err(err) => error!(?err, "Couldn't listen for termination signals"),
    }
}

#[cfg(unix)]
async fn wait_for_termination() -> io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|()| "SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|()| "ctrl-c")
}
