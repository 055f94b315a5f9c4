//! Terminal output utilities

use console::style;
use hatch_core::types::ScriptHint;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), style(msg).green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(msg).red());
}

/// Print a plain message in red on stdout
pub fn alert(msg: &str) {
    println!("{}", style(msg).red());
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print usage when no project directory was given
pub fn usage(bin: &str) {
    alert("Please specify the project directory");
    println!(
        "  {} {}",
        style(bin).cyan(),
        style("<project-directory>").green()
    );
    println!();
    println!("For example:");
    println!("  {} {}", style(bin).cyan(), style("my-react-app").green());
    println!();
    println!(
        "Run {} to see all options.",
        style(format!("{} --help", bin)).cyan()
    );
}

/// Print the next steps once the project is ready
pub fn next_steps(directory_name: &str, scripts: &[ScriptHint]) {
    println!();
    success("React project initial success");
    println!();
    println!("  {}", style(format!("cd {}", directory_name)).cyan());
    for script in scripts {
        println!();
        println!("  {}", style(&script.command).cyan());
        println!("    {}", script.description);
    }
}
