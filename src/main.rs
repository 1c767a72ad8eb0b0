use anna_cgpa::config::Config;
use anna_cgpa::output::{self, OutputFormat};
use anna_cgpa::theme::{self, Palette, Theme};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_VALIDATION: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate a semester GPA from a YAML course list
    Gpa {
        /// File with a `courses:` list
        file: PathBuf,

        /// Heading for the result (overrides the file and config)
        #[arg(long)]
        semester: Option<String>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Calculate an overall CGPA from a YAML semester list
    Cgpa {
        /// File with a `semesters:` list
        file: PathBuf,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the grading table
    Grades,
    /// Show or change the saved color theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeAction {
    Show,
    Light,
    Dark,
    Toggle,
}

#[derive(Parser, Debug)]
#[command(name = "anna-cgpa")]
#[command(about = "Anna University GPA and CGPA calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/anna-cgpa/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "anna_cgpa=debug" } else { "anna_cgpa=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Saved theme, falling back to light when the preference can't be read
fn saved_theme() -> Theme {
    let loaded = theme::get_theme_path().and_then(|path| theme::load_theme(&path));
    match loaded {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("Ignoring theme preference: {:#}", e);
            Theme::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match anna_cgpa::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = anna_cgpa::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let theme = saved_theme();
    let palette = (!cli.no_color && output::should_use_colors()).then(|| theme.palette());

    let code = match cli.command {
        Commands::Gpa {
            file,
            semester,
            format,
        } => run_gpa(&config, &file, semester, format, palette.as_ref()),
        Commands::Cgpa { file, format } => run_cgpa(&config, &file, format, palette.as_ref()),
        Commands::Grades => {
            println!("{}", output::format_grade_table(palette.as_ref()));
            EXIT_SUCCESS
        }
        Commands::Theme { action } => run_theme(theme, action),
    };

    std::process::exit(code);
}

fn run_gpa(
    config: &Config,
    file: &std::path::Path,
    semester: Option<String>,
    format: Option<OutputFormat>,
    palette: Option<&Palette>,
) -> i32 {
    let gpa_file = match anna_cgpa::input::load_gpa_file(file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let courses = gpa_file.course_inputs(&config.credit_defaults());
    let result = match anna_cgpa::grading::compute_gpa(&courses) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Please fix {}", e);
            return EXIT_VALIDATION;
        }
    };

    let semester_name = semester
        .or(gpa_file.semester)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| config.semester_name().to_string());

    match format.or(config.format).unwrap_or_default() {
        OutputFormat::Text => {
            println!("{}", output::format_gpa_report(&semester_name, &result, palette))
        }
        OutputFormat::Tsv => println!("{}", output::format_gpa_tsv(&result)),
        OutputFormat::Json => {
            let report = output::GpaReport {
                semester: &semester_name,
                result: &result,
            };
            match output::format_json(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to serialize result: {:#}", e);
                    return EXIT_FAILURE;
                }
            }
        }
    }

    EXIT_SUCCESS
}

fn run_cgpa(
    config: &Config,
    file: &std::path::Path,
    format: Option<OutputFormat>,
    palette: Option<&Palette>,
) -> i32 {
    let cgpa_file = match anna_cgpa::input::load_cgpa_file(file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let result = match anna_cgpa::grading::compute_cgpa(&cgpa_file.semester_inputs()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Please fix {}", e);
            return EXIT_VALIDATION;
        }
    };

    match format.or(config.format).unwrap_or_default() {
        OutputFormat::Text => println!("{}", output::format_cgpa_report(&result, palette)),
        OutputFormat::Tsv => println!("{}", output::format_cgpa_tsv(&result)),
        OutputFormat::Json => match output::format_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {:#}", e);
                return EXIT_FAILURE;
            }
        },
    }

    EXIT_SUCCESS
}

fn run_theme(current: Theme, action: ThemeAction) -> i32 {
    let next = match action {
        ThemeAction::Show => {
            println!("{}", current);
            return EXIT_SUCCESS;
        }
        ThemeAction::Light => Theme::Light,
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Toggle => current.toggled(),
    };

    let saved = theme::get_theme_path().and_then(|path| theme::save_theme(&path, next));
    if let Err(e) = saved {
        eprintln!("Failed to save theme: {:#}", e);
        return EXIT_FAILURE;
    }

    println!("Theme set to {}", next);
    EXIT_SUCCESS
}
