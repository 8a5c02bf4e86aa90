//! Wifi station bring-up and the TCP command server.
//!
//! Clients speak the line protocol of [`crate::robot::commands`]. A session lasts until
//! the client sends `q`, closes its side or the socket fails; the server then goes back
//! to waiting for the link and the next client.
use embassy_net::tcp::{self, TcpSocket};
use embassy_net::{IpListenEndpoint, Runner, Stack};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Sender};
use embassy_time::Timer;
use esp_wifi::config::PowerSaveMode;
use esp_wifi::wifi::{ClientConfiguration, Configuration, WifiController, WifiDevice, WifiError};
use log::{debug, info, warn};

use crate::config::{
    ACCEPT_BACKOFF_MS, CMD_CHANNEL_SIZE, LINE_BUF_SIZE, PORT, RX_BUF_SIZE, TX_BUF_SIZE,
};
use crate::robot::commands::{LineDecoder, SequencerCommand};

pub type CommandSender =
    Sender<'static, CriticalSectionRawMutex, SequencerCommand, CMD_CHANNEL_SIZE>;

/// Joins the access point named by the `WIFI_SSID`/`WIFI_PASS` build variables.
pub async fn join_wifi(controller: &mut WifiController<'_>) -> Result<(), WifiError> {
    let ssid = env!("WIFI_SSID");
    controller.set_configuration(&Configuration::Client(ClientConfiguration {
        ssid: ssid.into(),
        password: env!("WIFI_PASS").into(),
        ..Default::default()
    }))?;
    // latency over battery: commands must reach the sequencer between two steps
    controller.set_power_saving(PowerSaveMode::None)?;

    info!("[NET] joining {ssid}");
    controller.start()?;
    controller.connect_async().await?;

    match controller.rssi() {
        Ok(rssi) => info!("[NET] joined {ssid}, rssi {rssi}"),
        Err(_) => info!("[NET] joined {ssid}"),
    }
    Ok(())
}

/// Drives the embassy-net stack.
#[embassy_executor::task]
pub async fn stack_runner(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await
}

/// Accepts one client at a time and forwards its commands to the sequencer.
#[embassy_executor::task]
pub async fn command_server(stack: Stack<'static>, commands: CommandSender) {
    let mut rx_buf = [0u8; RX_BUF_SIZE];
    let mut tx_buf = [0u8; TX_BUF_SIZE];
    let endpoint = IpListenEndpoint {
        addr: None,
        port: PORT,
    };

    loop {
        stack.wait_link_up().await;
        stack.wait_config_up().await;
        if let Some(config) = stack.config_v4() {
            info!("[NET] listening on {}:{PORT}", config.address);
        }

        let mut socket = TcpSocket::new(stack, &mut rx_buf, &mut tx_buf);
        if let Err(e) = socket.accept(endpoint).await {
            warn!("[NET] accept failed: {e:?}");
            Timer::after_millis(ACCEPT_BACKOFF_MS).await;
            continue;
        }
        info!("[NET] client {:?} connected", socket.remote_endpoint());

        match serve(&mut socket, &commands).await {
            Ok(()) => info!("[NET] session closed"),
            Err(e) => warn!("[NET] session lost: {e:?}"),
        }
        socket.close();
        socket.flush().await.ok();
    }
}

/// Reads the client's byte stream and dispatches every complete line.
async fn serve(socket: &mut TcpSocket<'_>, commands: &CommandSender) -> Result<(), tcp::Error> {
    let mut lines = LineDecoder::<LINE_BUF_SIZE>::new();
    let mut chunk = [0u8; RX_BUF_SIZE];

    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            if !lines.pending().is_empty() {
                debug!("[NET] {} unterminated bytes dropped", lines.pending().len());
            }
            return Ok(());
        }

        for decoded in lines.feed(&chunk[..n]) {
            match decoded {
                Ok(SequencerCommand::CloseConnection) => return Ok(()),
                Ok(cmd) => commands.send(cmd).await,
                Err(e) => warn!("[NET] {e}"),
            }
        }
    }
}
