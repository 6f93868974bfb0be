use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use ratio_ghost::common::common::setup_logging;
use ratio_ghost::config::structs::configuration::Configuration;
use ratio_ghost::proxy::proxy::proxy_service;
use ratio_ghost::proxy::structs::proxy_state::ProxyState;
use ratio_ghost::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let state = Arc::new(ProxyState::new(config.clone()));
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let (proxy_tx, proxy_rx) = tokio::sync::watch::channel(false);
            let proxy_handle = match proxy_service(state.clone(), proxy_rx).await {
                Ok((address, handle)) => {
                    info!("[BOOT] Proxy listening on {address}, point the BitTorrent client's HTTP proxy here");
                    handle
                }
                Err(error) => {
                    sentry::capture_error(&error);
                    error!("[BOOT] Unable to bind to {}: {error}", config.proxy_config.bind_address);
                    exit(1);
                }
            };

            let stats_handler = tokio_shutdown.clone();
            let state_spawn_stats = state.clone();
            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let stats = state_spawn_stats.get_stats();
                                info!(
                                    "[STATS] Swarms: {} - Conn: {} (active {}) - Rewritten: {} - Ignored: {} - Relayed: {}",
                                    state_spawn_stats.swarms.len(),
                                    stats.connections_handled,
                                    stats.connections_active,
                                    stats.announces_rewritten,
                                    stats.requests_ignored,
                                    stats.replies_relayed
                                );
                                info!(
                                    "[STATS] Failures: Resolve:{} Forward:{} Decode:{} Handler:{} | Swarm updates: {}",
                                    stats.resolve_failures,
                                    stats.forward_failures,
                                    stats.decode_failures,
                                    stats.handler_errors,
                                    stats.swarm_updates
                                );
                            }
                            _ = stats_handler.handle() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            #[cfg(unix)]
            {
                let reload_handler = tokio_shutdown.clone();
                let state_spawn_reload = state.clone();
                let config_path = args.config.clone();
                match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup()) {
                    Ok(mut hangup) => {
                        info!("[BOOT] Starting thread for policy reloads on SIGHUP...");
                        tokio::spawn(async move {
                            loop {
                                tokio::select! {
                                    _ = hangup.recv() => {
                                        match state_spawn_reload.reload_policy_from(&config_path) {
                                            Ok(_) => info!("[POLICY] Reloaded policy from {config_path}"),
                                            Err(error) => error!("[POLICY] Keeping current policy, reload from {config_path} failed: {error}"),
                                        }
                                    }
                                    _ = reload_handler.handle() => {
                                        info!("[BOOT] Shutting down thread for policy reloads...");
                                        return;
                                    }
                                }
                            }
                        });
                    }
                    Err(error) => {
                        error!("[BOOT] Unable to listen for SIGHUP, policy reload disabled: {error}");
                    }
                }
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    let _ = proxy_tx.send(true);
                    if let Err(error) = proxy_handle.await {
                        sentry::capture_error(&error);
                        error!("Errors happened on shutting down the proxy listener: {error}");
                    }
                    tokio_shutdown.handle().await;
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
