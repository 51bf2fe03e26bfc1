//! Startup message printed once the server is bound.

use std::{fmt, net::SocketAddr, path::Path};

/// What the launcher reports before it starts serving.
pub struct Banner<'a> {
    pub addr: SocketAddr,
    pub database: &'a Path,
    pub model: &'a str,
    pub stored_decisions: usize,
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Waypoint")?;
        writeln!(f)?;
        writeln!(f, "You can now open the planning agent in your browser.")?;
        writeln!(f)?;
        writeln!(f, "- **Local URL:** http://{}", self.addr)?;
        writeln!(f, "- **Database:** {}", self.database.display())?;
        writeln!(f, "- **Model:** {}", self.model)?;
        writeln!(f, "- **Stored decisions:** {}", self.stored_decisions)?;
        writeln!(f)?;
        writeln!(f, "Press Ctrl+C to stop.")
    }
}
