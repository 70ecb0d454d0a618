// ==========================================
// 包配置器 - 命令行主入口
// ==========================================
// 子命令:
//   artikel   - 浏览目录（名称筛选）
//   paket     - 配置包，输出汇总与报价文本，可选导出
//   hochladen - 上传替换目录（重启后生效）
//   konfig    - 显示/保存当前生效配置
// ==========================================

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use paket_konfigurator::api::validator::parse_selection_arg;
use paket_konfigurator::api::{ApiError, ApiResult};
use paket_konfigurator::app::{get_default_config_path, AppState};
use paket_konfigurator::config::{AppConfig, ConfigManager};
use paket_konfigurator::export::ExportFormat;
use paket_konfigurator::i18n::{self, t, t_with_args};
use paket_konfigurator::{logging, PackageSummary};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Xlsx,
    Csv,
}

impl From<Fmt> for ExportFormat {
    fn from(fmt: Fmt) -> Self {
        match fmt {
            Fmt::Xlsx => ExportFormat::Xlsx,
            Fmt::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "paket-konfigurator", version, about = paket_konfigurator::APP_NAME)]
struct Cli {
    /// Konfigurationsdatei (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Artikelliste (überschreibt Konfiguration und hochgeladene Datei)
    #[arg(long, global = true)]
    katalog: Option<PathBuf>,

    /// Sprache der Ausgabe (de / en)
    #[arg(long, global = true)]
    sprache: Option<String>,

    /// Logausgabe als JSON
    #[arg(long, global = true)]
    json_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verfügbare Artikel anzeigen
    Artikel {
        /// Suche (Name, ohne Groß-/Kleinschreibung)
        #[arg(short, long)]
        suche: Option<String>,
    },

    /// Paket konfigurieren und Angebot erzeugen
    Paket {
        /// Position im Format "Artikel=Menge" (mehrfach möglich)
        #[arg(short, long = "artikel")]
        artikel: Vec<String>,

        /// Rabatt in Prozent (0–100)
        #[arg(short, long, default_value_t = 0.0)]
        rabatt: f64,

        /// Mehrwertsteuer in Prozent (0, 7 oder 19)
        #[arg(short, long)]
        mwst: Option<u8>,

        /// Paket als Tabelle und Angebotstext exportieren
        #[arg(long)]
        export: bool,

        /// Zielverzeichnis für den Export
        #[arg(long)]
        ausgabe: Option<PathBuf>,

        /// Tabellenformat für den Export
        #[arg(long, value_enum)]
        format: Option<Fmt>,

        /// Zusammenfassung als JSON ausgeben
        #[arg(long)]
        json: bool,
    },

    /// Neue Excel-Liste hochladen (wirksam nach Neustart)
    Hochladen {
        /// Excel-Datei (.xlsx / .xls)
        datei: PathBuf,
    },

    /// Wirksame Konfiguration anzeigen
    Konfig {
        /// Konfiguration in die Konfigurationsdatei schreiben
        #[arg(long)]
        speichern: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.json_log);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(code = err.code(), "{}", err);
            eprintln!("{}: {}", t("error.prefix"), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ApiResult<ExitCode> {
    let config_path = cli.config.clone().unwrap_or_else(get_default_config_path);
    let config = ConfigManager::load(&config_path)?;

    i18n::set_locale(cli.sprache.as_deref().unwrap_or(&config.locale));
    tracing::debug!(config = %config_path.display(), "配置加载完成");

    if let Command::Konfig { speichern } = cli.command {
        return run_konfig(&config, &config_path, speichern);
    }

    let state = match cli.katalog.clone() {
        Some(path) => AppState::with_catalog(config, path),
        None => AppState::new(config),
    };

    match cli.command {
        Command::Artikel { suche } => run_artikel(&state, suche.as_deref()),
        Command::Paket {
            artikel,
            rabatt,
            mwst,
            export,
            ausgabe,
            format,
            json,
        } => run_paket(
            &state,
            PaketArgs {
                artikel,
                rabatt,
                mwst,
                export,
                ausgabe,
                format: format.map(ExportFormat::from),
                json,
            },
        ),
        Command::Hochladen { datei } => run_hochladen(&state, &datei),
        Command::Konfig { .. } => Ok(ExitCode::SUCCESS),
    }
}

/// 目录不可用时提示并停止（不是致命错误）
fn catalog_halt(state: &AppState) -> Option<ExitCode> {
    let path = state.catalog_path.display().to_string();
    match state.ensure_catalog_ready() {
        Ok(()) => None,
        Err(ApiError::CatalogLoadFailure(reason)) => {
            eprintln!(
                "{}",
                t_with_args("catalog.load_failed", &[("path", &path), ("error", &reason)])
            );
            eprintln!("{}", t_with_args("catalog.no_data", &[("path", &path)]));
            Some(ExitCode::from(2))
        }
        Err(_) => {
            eprintln!("{}", t_with_args("catalog.no_data", &[("path", &path)]));
            Some(ExitCode::from(2))
        }
    }
}

fn run_artikel(state: &AppState, query: Option<&str>) -> Result<ExitCode, ApiError> {
    if let Some(code) = catalog_halt(state) {
        return Ok(code);
    }

    let query = query.unwrap_or("");
    let entries = state.package_api.list_articles(query)?;

    println!("{}", t("catalog.title"));
    if let Some(layout) = state.catalog.layout() {
        let column = layout.price_column.as_deref().unwrap_or("-");
        println!(
            "{}",
            t_with_args(
                "catalog.source",
                &[("path", &state.catalog_path.display().to_string()), ("column", column)]
            )
        );
    }
    println!();

    if entries.is_empty() {
        println!("{}", t_with_args("catalog.no_match", &[("query", query)]));
        return Ok(ExitCode::SUCCESS);
    }

    let width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(t("catalog.column_article").chars().count());

    println!(
        "{:<width$}  {:>10}",
        t("catalog.column_article"),
        t("catalog.column_price"),
        width = width
    );
    for entry in entries {
        println!("{:<width$}  {:>8.2} €", entry.name, entry.unit_price, width = width);
    }

    Ok(ExitCode::SUCCESS)
}

struct PaketArgs {
    artikel: Vec<String>,
    rabatt: f64,
    mwst: Option<u8>,
    export: bool,
    ausgabe: Option<PathBuf>,
    format: Option<ExportFormat>,
    json: bool,
}

fn run_paket(state: &AppState, args: PaketArgs) -> Result<ExitCode, ApiError> {
    if let Some(code) = catalog_halt(state) {
        return Ok(code);
    }

    if args.artikel.is_empty() {
        println!("{}", t("package.select_hint"));
        return Ok(ExitCode::SUCCESS);
    }

    let items = args
        .artikel
        .iter()
        .map(|raw| parse_selection_arg(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let vat_pct = args
        .mwst
        .unwrap_or_else(|| state.config.default_vat.percent());

    let summary = state.package_api.configure(items, args.rabatt, vat_pct)?;

    if summary.is_empty() {
        println!("{}", t("package.empty"));
        return Ok(ExitCode::SUCCESS);
    }

    let now = Local::now().naive_local();
    let bundle = state.package_api.export(
        &summary,
        now,
        args.format.unwrap_or(state.config.export_format),
    )?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        println!("{}", json);
    } else {
        print_summary(&summary);
        println!();
        println!("{}", t("offer.title"));
        println!("{}", "-".repeat(40));
        print!("{}", bundle.text);
    }

    if args.export {
        let dir = args
            .ausgabe
            .unwrap_or_else(|| state.config.export_dir.clone());
        let (spreadsheet, text) = bundle.write_to(&dir)?;
        eprintln!("{}", t_with_args("export.written", &[("path", &spreadsheet.display().to_string())]));
        eprintln!("{}", t_with_args("export.written", &[("path", &text.display().to_string())]));
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &PackageSummary) {
    println!("{}", t("summary.title"));
    println!("{}", "-".repeat(40));

    let width = summary
        .line_items
        .iter()
        .map(|l| l.article.chars().count())
        .max()
        .unwrap_or(0)
        .max(t("summary.column_article").chars().count());

    println!(
        "{:<width$}  {:>6}  {:>12}  {:>12}",
        t("summary.column_article"),
        t("summary.column_quantity"),
        t("summary.column_price"),
        t("summary.column_line"),
        width = width
    );
    for line in &summary.line_items {
        println!(
            "{:<width$}  {:>6}  {:>10.2} €  {:>10.2} €",
            line.article,
            line.quantity,
            line.unit_price,
            line.net_amount,
            width = width
        );
    }

    println!();
    println!("{}: {:.2} €", t("summary.subtotal"), summary.net_subtotal);
    if summary.discount_pct.is_applied() {
        let pct = format!("{:.2}", summary.discount_pct.value());
        println!(
            "{}: −{:.2} €",
            t_with_args("summary.discount", &[("pct", &pct)]),
            summary.discount_amount
        );
    }
    if summary.vat_applied() {
        let pct = summary.vat_rate.percent().to_string();
        println!(
            "{}: {:.2} €",
            t_with_args("summary.vat", &[("pct", &pct)]),
            summary.vat_amount
        );
    }
    println!("{}: {:.2} €", t("summary.gross"), summary.gross_total);
}

fn run_hochladen(state: &AppState, datei: &Path) -> Result<ExitCode, ApiError> {
    let receipt = state.upload_api.upload(datei)?;

    println!(
        "{}",
        t_with_args(
            "upload.saved",
            &[
                ("path", &receipt.stored_path.display().to_string()),
                ("count", &receipt.entries.to_string()),
            ]
        )
    );
    Ok(ExitCode::SUCCESS)
}

fn run_konfig(config: &AppConfig, config_path: &Path, speichern: bool) -> ApiResult<ExitCode> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;
    println!("{}", json);

    if speichern {
        ConfigManager::save(config_path, config)?;
        eprintln!(
            "{}",
            t_with_args("config.saved", &[("path", &config_path.display().to_string())])
        );
    }
    Ok(ExitCode::SUCCESS)
}
