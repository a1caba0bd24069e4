//! Serial transport implementation

use super::Transport;
use crate::config::SerialConfig;
use crate::error::{Error, Result};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::Read;

/// Serial transport for the sonar's UART link
///
/// Owns exactly one handle to the device for its lifetime. The handle
/// is released when the transport is dropped, on every exit path.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open and configure the sonar's serial device
    ///
    /// Opening and configuring are distinct failure modes: a missing
    /// or inaccessible device yields [`Error::Open`], while a failure
    /// to apply attributes to the open handle yields [`Error::Config`]
    /// and drops the handle.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(&config.port, config.baud_rate)
            .open()
            .map_err(|source| Error::Open {
                path: config.port.clone(),
                source,
            })?;

        let mut transport = SerialTransport { port };
        transport.configure(config)?;

        log::info!(
            "Opened serial port: {} at {} baud (read timeout {} ds)",
            config.port,
            config.baud_rate,
            config.read_timeout_ds
        );

        Ok(transport)
    }

    /// Apply frame format and read-timeout policy to the open handle
    fn configure(&mut self, config: &SerialConfig) -> Result<()> {
        self.port.set_data_bits(DataBits::Eight).map_err(Error::Config)?;
        self.port.set_parity(Parity::None).map_err(Error::Config)?;
        self.port.set_stop_bits(StopBits::One).map_err(Error::Config)?;
        self.port
            .set_flow_control(FlowControl::None)
            .map_err(Error::Config)?;
        // Blocking-read policy: return as soon as any data arrives,
        // or empty once the timeout elapses.
        self.port
            .set_timeout(config.read_timeout())
            .map_err(Error::Config)?;
        Ok(())
    }
}

impl Transport for SerialTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        match self.port.read(buffer) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_device_fails() {
        let config = SerialConfig {
            port: "/dev/nonexistent-sonar".to_string(),
            baud_rate: 9600,
            read_timeout_ds: 10,
        };

        let err = SerialTransport::open(&config)
            .err()
            .expect("open of a missing device must fail");
        match err {
            Error::Open { path, .. } => assert_eq!(path, "/dev/nonexistent-sonar"),
            other => panic!("expected Error::Open, got {}", other),
        }
    }
}
