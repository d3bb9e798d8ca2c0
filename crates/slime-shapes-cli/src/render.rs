// Imports
use crate::cli::{self, OnConflict, SceneArgs};
use crate::generate::{encode_image, file_name_string, LabelRecord};
use crate::validators;
use anyhow::Context;
use image::ImageFormat;
use slime_shapes::utils::{new_rng_default_pcg64, random_seed};
use slime_shapes::Scene;
use std::path::Path;

/// The image formats that can be written.
const OUTPUT_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
];

pub(crate) async fn run_render(
    output_file: &Path,
    scene_args: &SceneArgs,
    labels_file: Option<&Path>,
    on_conflict: OnConflict,
    open: bool,
) -> anyhow::Result<()> {
    let format = output_format(output_file)?;
    if let Some(labels_file) = labels_file {
        validators::path_has_ext(labels_file, "json")?;
    }
    let config = scene_args.scene_config().await?;
    let seed = scene_args.seed.unwrap_or_else(random_seed);

    let output_file_disp = output_file.display().to_string();
    let progressbar = cli::new_progressbar(format!("Rendering \"{output_file_disp}\""));

    let scene = match Scene::generate(&mut new_rng_default_pcg64(Some(seed)), &config) {
        Ok(scene) => scene,
        Err(e) => {
            let abandon_msg = format!("Rendering \"{output_file_disp}\" failed, Err: {e}");
            tracing::warn!(seed, "rendering scene failed");
            if progressbar.is_hidden() {
                println!("{abandon_msg}");
            }
            progressbar.abandon_with_message(abandon_msg);
            return Err(e.into());
        }
    };
    let bytes = encode_image(&scene.render(), format)?;
    progressbar.finish_and_clear();

    let mut on_conflict_overwrite = None;
    let Some(output_file) =
        cli::check_file_conflict(output_file, on_conflict, &mut on_conflict_overwrite)?
    else {
        return Ok(());
    };
    cli::create_overwrite_file_w_bytes(&output_file, &bytes)
        .await
        .with_context(|| format!("Failed to write image \"{}\"", output_file.display()))?;
    println!("Rendered \"{}\" (seed {seed})", output_file.display());

    if let Some(labels_file) = labels_file {
        if let Some(labels_file) =
            cli::check_file_conflict(labels_file, on_conflict, &mut on_conflict_overwrite)?
        {
            let record = LabelRecord {
                file: file_name_string(&output_file)?,
                seed,
                scene: &scene,
            };
            cli::create_overwrite_file_w_bytes(&labels_file, &serde_json::to_vec_pretty(&record)?)
                .await
                .with_context(|| format!("Failed to write labels \"{}\"", labels_file.display()))?;
        }
    }

    if open {
        cli::open_file_default_app(&output_file)?;
    }
    Ok(())
}

/// The image format for the extension of the output file.
pub(crate) fn output_format(output_file: &Path) -> anyhow::Result<ImageFormat> {
    let format = ImageFormat::from_path(output_file).with_context(|| {
        format!(
            "Failed to recognize an image format from the extension of \"{}\"",
            output_file.display()
        )
    })?;
    if !OUTPUT_FORMATS.contains(&format) {
        return Err(anyhow::anyhow!(
            "Image format {format:?} is not supported, use one of: png, jpeg, bmp, tiff, webp"
        ));
    }
    Ok(format)
}
