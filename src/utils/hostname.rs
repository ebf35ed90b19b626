// Hostname lookup used to identify the instance answering a ping

use std::io;
use std::ffi::OsString;

/// Anything able to report the name of the local machine
pub trait HostnameSource: Send + Sync {
    fn hostname(&self) -> io::Result<String>;
}

/// Asks the operating system on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> io::Result<String> {
        let raw: OsString = ::hostname::get()?;
        let name: String = raw.into_string().map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("hostname is not valid UTF-8: {:?}", raw),
            )
        })?;

        if name.is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "hostname is empty"));
        }

        Ok(name)
    }
}

/// A fixed name, handy for tests and containers with a known identity
#[derive(Debug, Clone)]
pub struct StaticHostname(pub String);

impl HostnameSource for StaticHostname {
    fn hostname(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}
