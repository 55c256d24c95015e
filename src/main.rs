//! CLI entry point for paramedit.

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};

use paramedit::cli::Cli;
use paramedit::config::Settings;
use paramedit::editor::ParameterEditor;
use paramedit::export::{render_model, write_model};
use paramedit::logging::{LogTarget, init_logging};
use paramedit::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "paramedit", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(ref path) = cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let figment = Settings::figment(cli.config.as_deref()).merge(cli.to_config_overrides());
    let settings = Settings::from_figment(&figment).wrap_err("Failed to load settings")?;

    let target = LogTarget::select(settings.logging.file.as_deref(), cli.interactive);
    let _guard = init_logging(&target, &settings.logging.level);

    let form = settings.form_or_demo();

    if let Some(ref path) = cli.save_config {
        form.save(path)
            .wrap_err_with(|| format!("Failed to save config to {}", path.display()))?;
        eprintln!("Saved form definition to {}", path.display());
    }

    let mut editor = ParameterEditor::new(form.params, form.model);

    for (id, value) in &cli.set {
        if !editor.handle_change(*id, value.as_str()) {
            bail!("Unknown parameter id {id} in --set");
        }
    }

    if cli.interactive {
        let editor = tui::run(editor, settings.output.clone())?;
        let model = editor.get_model();
        tracing::info!(?model, "final model");
        return Ok(());
    }

    let model = editor.get_model();
    match settings.output.path {
        Some(ref path) => {
            write_model(&model, settings.output.format, path)
                .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Wrote model to {}", path.display());
        }
        None => {
            let text = render_model(&model, settings.output.format)
                .wrap_err("Failed to render model")?;
            print!("{text}");
        }
    }

    Ok(())
}
