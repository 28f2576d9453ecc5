//! Tello SDK driver.
//!
//! Speaks the Tello text protocol over UDP: each command is a single
//! datagram (`takeoff`, `forward 30`, `ccw 45`, ...) answered by `ok` or an
//! error string once the manoeuvre completes. `connect` enters SDK mode by
//! sending `command`.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::Mutex;

use crate::config::DroneConfig;
use crate::domain::drone::DroneAction;
use crate::ports::{DroneDriver, DroneError};

const SDK_MODE_COMMAND: &str = "command";
const REPLY_BUFFER: usize = 1024;

/// UDP driver for Tello-compatible drones.
#[derive(Debug)]
pub struct TelloDrone {
    address: SocketAddr,
    local_bind: SocketAddr,
    timeout: Duration,
    socket: Mutex<Option<UdpSocket>>,
}

impl TelloDrone {
    /// Creates a driver that will talk to `address` once connected.
    pub fn new(address: SocketAddr, local_bind: SocketAddr, timeout: Duration) -> Self {
        Self {
            address,
            local_bind,
            timeout,
            socket: Mutex::new(None),
        }
    }

    /// Creates a driver from configuration.
    pub fn from_config(config: &DroneConfig) -> Result<Self, DroneError> {
        let address = config
            .address
            .parse()
            .map_err(|e| DroneError::Unavailable(format!("invalid drone address: {}", e)))?;
        let local_bind = config
            .local_bind
            .parse()
            .map_err(|e| DroneError::Unavailable(format!("invalid local bind address: {}", e)))?;
        Ok(Self::new(address, local_bind, config.command_timeout()))
    }

    async fn send_command(&self, command: &str) -> Result<(), DroneError> {
        let guard = self.socket.lock().await;
        let socket = guard
            .as_ref()
            .ok_or_else(|| DroneError::Unavailable("not connected".to_string()))?;
        exchange(socket, command, self.timeout).await
    }

    async fn send_action(&self, action: DroneAction) -> Result<(), DroneError> {
        self.send_command(&action.sdk_command()).await
    }
}

async fn exchange(socket: &UdpSocket, command: &str, timeout: Duration) -> Result<(), DroneError> {
    tracing::debug!(command, "sending drone command");
    socket.send(command.as_bytes()).await?;

    let mut buf = [0u8; REPLY_BUFFER];
    let len = tokio::time::timeout(timeout, socket.recv(&mut buf))
        .await
        .map_err(|_| DroneError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        })??;

    let reply = String::from_utf8_lossy(&buf[..len]).trim().to_string();
    if reply.eq_ignore_ascii_case("ok") {
        Ok(())
    } else {
        Err(DroneError::Rejected {
            command: command.to_string(),
            reply,
        })
    }
}

#[async_trait]
impl DroneDriver for TelloDrone {
    fn name(&self) -> &'static str {
        "tello"
    }

    async fn connect(&self) -> Result<(), DroneError> {
        let mut guard = self.socket.lock().await;
        let socket = UdpSocket::bind(self.local_bind).await?;
        socket.connect(self.address).await?;
        exchange(&socket, SDK_MODE_COMMAND, self.timeout).await?;
        *guard = Some(socket);
        Ok(())
    }

    async fn takeoff(&self) -> Result<(), DroneError> {
        self.send_action(DroneAction::Takeoff).await
    }

    async fn land(&self) -> Result<(), DroneError> {
        self.send_action(DroneAction::Land).await
    }

    async fn move_forward(&self, cm: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::MoveForward(cm)).await
    }

    async fn move_back(&self, cm: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::MoveBack(cm)).await
    }

    async fn move_left(&self, cm: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::MoveLeft(cm)).await
    }

    async fn move_right(&self, cm: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::MoveRight(cm)).await
    }

    async fn move_up(&self, cm: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::MoveUp(cm)).await
    }

    async fn move_down(&self, cm: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::MoveDown(cm)).await
    }

    async fn flip_back(&self) -> Result<(), DroneError> {
        self.send_action(DroneAction::FlipBack).await
    }

    async fn rotate_ccw(&self, degrees: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::RotateCcw(degrees)).await
    }

    async fn rotate_cw(&self, degrees: u32) -> Result<(), DroneError> {
        self.send_action(DroneAction::RotateCw(degrees)).await
    }
}
