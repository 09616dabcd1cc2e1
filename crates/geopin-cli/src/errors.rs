use console::style;
use std::fmt;
use std::path::Path;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a point outside the WGS84 range
pub fn invalid_point(point: &str, reason: &str) -> CliError {
    CliError::new("Invalid coordinate")
        .with_context(format!(
            "The point cannot be formatted.\n\nPoint: {}\nReason: {}",
            point, reason
        ))
        .with_suggestion("Latitude must be within [-90, 90]")
        .with_suggestion("Longitude must be within [-180, 180]")
        .with_suggestion("Pass the point as \"latitude, longitude\", e.g. \"35.6762, 139.6503\"")
        .with_help("Run: geopin show --help")
}

/// Create error for a missing configuration file
pub fn config_not_found(path: &Path) -> CliError {
    CliError::new("Configuration file not found")
        .with_context(format!(
            "The specified configuration file does not exist.\n\nPath: {}",
            path.display()
        ))
        .with_suggestion("Check the path passed to --config")
        .with_suggestion("Or drop --config to use .geopin/config.toml or the defaults")
        .with_help("Run: geopin config")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check .geopin/config.toml for syntax errors")
        .with_suggestion("Or override the value with a GEOPIN_* environment variable")
        .with_help("Run: geopin config")
}
