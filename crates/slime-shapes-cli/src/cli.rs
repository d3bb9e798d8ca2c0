// Imports
use crate::{generate, render, validators};

use anyhow::Context;
use clap::Parser;
use slime_shapes::{Color, SceneConfig, ShapeKind};
use smol::fs::File;
use smol::io::{AsyncReadExt, AsyncWriteExt};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

///    slime-shapes-cli{n}{n}
///    Generates images of non-overlapping squares and circles on a colored background,{n}
///    together with their labels.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Generates a dataset of images into a directory.{n}
    /// Writes the images as `image_NNNNN.png` and their labels to `labels.json`.
    Generate {
        /// The output directory. Gets created if it doesn't exist.
        output_dir: PathBuf,
        /// The number of images.
        #[arg(short = 'n', long, default_value_t = 10)]
        images: usize,
        #[command(flatten)]
        scene_args: SceneArgs,
        /// The action that will be performed if output files already exist.
        #[arg(long, default_value = "ask")]
        on_conflict: OnConflict,
        /// Open the output directory when finished.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        open: bool,
    },
    /// Renders a single image.{n}
    /// The image format is recognized from the file extension of the output file.
    Render {
        /// The output image file.
        output_file: PathBuf,
        #[command(flatten)]
        scene_args: SceneArgs,
        /// Also write the label of the image to this json file.
        #[arg(short = 'l', long)]
        labels: Option<PathBuf>,
        /// The action that will be performed if output files already exist.
        #[arg(long, default_value = "ask")]
        on_conflict: OnConflict,
        /// Open the image when finished.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        open: bool,
    },
}

/// Arguments for generating scenes. When set, they take precedence over the values in the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub(crate) struct SceneArgs {
    /// A json config file, see `SceneConfig` for the available fields.
    #[arg(short = 'c', long)]
    pub(crate) config: Option<PathBuf>,
    /// The width and height of the images in pixels. [default: 100]
    #[arg(short = 's', long)]
    pub(crate) canvas_size: Option<u32>,
    /// The number of shapes per image. [default: 3]
    #[arg(long)]
    pub(crate) shapes: Option<usize>,
    /// The maximum number of attempts for placing a single shape. [default: 10000]
    #[arg(long)]
    pub(crate) max_attempts: Option<u64>,
    /// The shape kinds to choose from, comma separated. [default: square,circle]
    #[arg(long, value_delimiter = ',')]
    pub(crate) kinds: Vec<ShapeKind>,
    /// The colors to choose from, comma separated preset names or hex colors.{n}
    /// [default: orange,purple,salmon,pink,blue]
    #[arg(long, value_delimiter = ',')]
    pub(crate) palette: Vec<Color>,
    /// The seed for the random number generator. A random seed is used when not set.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

impl SceneArgs {
    /// The config file (or the default config) with the given arguments applied.
    pub(crate) async fn scene_config(&self) -> anyhow::Result<SceneConfig> {
        let mut config = match &self.config {
            Some(config_file) => {
                validators::file_has_ext(config_file, "json")?;
                let bytes = read_bytes_from_file(config_file).await?;
                serde_json::from_slice::<SceneConfig>(&bytes).with_context(|| {
                    format!(
                        "Failed to parse config file \"{}\".",
                        config_file.display()
                    )
                })?
            }
            None => SceneConfig::default(),
        };

        if let Some(canvas_size) = self.canvas_size {
            config.canvas_size = canvas_size;
        }
        if let Some(shapes) = self.shapes {
            config.shape_count = shapes;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if !self.kinds.is_empty() {
            config.kinds = self.kinds.clone();
        }
        if !self.palette.is_empty() {
            config.palette = self.palette.clone();
        }
        tracing::debug!(?config, "resolved scene config");
        Ok(config)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OnConflict {
    #[default]
    /// Ask before overwriting.
    Ask,
    /// Overwrite existing files.
    Overwrite,
    #[value(skip)]
    AlwaysOverwrite,
    /// Skip the file.
    Skip,
    #[value(skip)]
    AlwaysSkip,
    /// Append a number as a suffix to the file name.
    Suffix,
    #[value(skip)]
    AlwaysSuffix,
}

impl std::fmt::Display for OnConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Ask => "Open existing file for inspection and ask again",
                Self::Overwrite => "Overwrite existing file",
                Self::AlwaysOverwrite => "Always overwrite existing files",
                Self::Skip => "Skip file",
                Self::AlwaysSkip => "Always skip file",
                Self::Suffix => "Append a number as a suffix to the file name",
                Self::AlwaysSuffix => "Always append a number as a suffix to the file name",
            }
        )
    }
}

pub(crate) async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            output_dir,
            images,
            scene_args,
            on_conflict,
            open,
        } => {
            println!("Generating..");
            generate::run_generate(&output_dir, images, &scene_args, on_conflict, open).await?;
            println!("Generate finished!");
        }
        Command::Render {
            output_file,
            scene_args,
            labels,
            on_conflict,
            open,
        } => {
            println!("Rendering..");
            render::run_render(
                &output_file,
                &scene_args,
                labels.as_deref(),
                on_conflict,
                open,
            )
            .await?;
            println!("Render finished!");
        }
    }

    Ok(())
}

pub(crate) fn new_progressbar(message: String) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner().with_message(message);
    pb.set_draw_target(indicatif::ProgressDrawTarget::stdout());
    pb.enable_steady_tick(Duration::from_millis(8));
    pb
}

pub(crate) async fn read_bytes_from_file(file_path: impl AsRef<Path>) -> anyhow::Result<Vec<u8>> {
    let mut bytes = vec![];
    let mut fh = File::open(file_path).await?;
    fh.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

pub(crate) async fn create_overwrite_file_w_bytes(
    output_file: impl AsRef<Path>,
    bytes: &[u8],
) -> anyhow::Result<()> {
    let mut fh = File::create(output_file).await?;
    fh.write_all(bytes).await?;
    fh.sync_all().await?;
    Ok(())
}

pub(crate) fn open_file_default_app(file_path: impl AsRef<Path>) -> anyhow::Result<()> {
    open::that_detached(file_path.as_ref()).with_context(|| {
        format!(
            "Failed to open output file/folder \"{}\".",
            file_path.as_ref().display()
        )
    })?;
    Ok(())
}

/// Resolves a conflict with an existing output file.
///
/// Returns the path that should be written to, or `None` when the file should be skipped.
/// The `Always*` choices made in the prompt are stored in `on_conflict_overwrite` and applied to all following conflicts.
pub(crate) fn check_file_conflict(
    output_file: &Path,
    mut on_conflict: OnConflict,
    on_conflict_overwrite: &mut Option<OnConflict>,
) -> anyhow::Result<Option<PathBuf>> {
    if !output_file.exists() {
        return Ok(Some(output_file.to_path_buf()));
    }
    if let Some(o) = on_conflict_overwrite {
        on_conflict = *o;
    }
    if on_conflict == OnConflict::Ask && !std::io::stdout().is_terminal() {
        return Err(anyhow::anyhow!(
            "File conflict detected and terminal is not interactive. Please supply --on-conflict"
        ));
    }
    let options = &[
        OnConflict::Ask,
        OnConflict::Overwrite,
        OnConflict::AlwaysOverwrite,
        OnConflict::Skip,
        OnConflict::AlwaysSkip,
        OnConflict::Suffix,
        OnConflict::AlwaysSuffix,
    ];
    while on_conflict == OnConflict::Ask {
        match dialoguer::Select::new()
            .with_prompt(format!("File \"{}\" already exists:", output_file.display()))
            .items(options)
            .default(1)
            .interact()
        {
            Ok(0) => {
                if let Err(e) = open::that(output_file) {
                    println!(
                        "Failed to open {} with default program, {e:?}",
                        output_file.display()
                    );
                }
            }
            Ok(c) => on_conflict = options[c],
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to show select prompt, retry or select an behavior with --on-conflict, {e:?}"
                ))
            }
        };
    }
    match on_conflict {
        OnConflict::AlwaysOverwrite => {
            on_conflict = OnConflict::Overwrite;
            *on_conflict_overwrite = Some(on_conflict);
        }
        OnConflict::AlwaysSkip => {
            on_conflict = OnConflict::Skip;
            *on_conflict_overwrite = Some(on_conflict);
        }
        OnConflict::AlwaysSuffix => {
            on_conflict = OnConflict::Suffix;
            *on_conflict_overwrite = Some(on_conflict);
        }
        OnConflict::Ask | OnConflict::Overwrite | OnConflict::Skip | OnConflict::Suffix => (),
    }
    match on_conflict {
        OnConflict::Overwrite => Ok(Some(output_file.to_path_buf())),
        OnConflict::Skip => {
            tracing::warn!("Skipping existing file \"{}\"", output_file.display());
            Ok(None)
        }
        OnConflict::Suffix => Ok(Some(suffixed_path(output_file)?)),
        OnConflict::Ask
        | OnConflict::AlwaysOverwrite
        | OnConflict::AlwaysSkip
        | OnConflict::AlwaysSuffix => Err(anyhow::anyhow!("Failed to save user choice!")),
    }
}

/// The first path with `_N` appended to the file stem that doesn't exist yet.
fn suffixed_path(output_file: &Path) -> anyhow::Result<PathBuf> {
    let mut i = 0;
    let mut new_path = output_file.to_path_buf();
    let Some(file_stem) = output_file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
    else {
        return Err(anyhow::anyhow!("Failed to get file stem"));
    };
    let ext = output_file
        .extension()
        .map(|n| format!(".{}", n.to_string_lossy()))
        .unwrap_or_default();
    while new_path.exists() {
        i += 1;
        new_path.set_file_name(format!("{file_stem}_{i}{ext}"))
    }
    Ok(new_path)
}
