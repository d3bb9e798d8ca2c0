// Imports
use crate::cli::{self, OnConflict, SceneArgs};
use crate::validators;
use anyhow::Context;
use image::{ImageFormat, RgbImage};
use rayon::prelude::*;
use serde::Serialize;
use slime_shapes::utils::{new_rng_default_pcg64, random_seed, seed_advance};
use slime_shapes::{Scene, SceneConfig};
use std::io::Cursor;
use std::path::Path;

/// The file name of the labels inside the output directory.
pub(crate) const LABELS_FILE_NAME: &str = "labels.json";

/// The label of a generated image.
#[derive(Debug, Serialize)]
pub(crate) struct LabelRecord<'a> {
    /// The image file name.
    pub(crate) file: String,
    /// The seed the scene was generated from.
    pub(crate) seed: u64,
    pub(crate) scene: &'a Scene,
}

pub(crate) async fn run_generate(
    output_dir: &Path,
    images: usize,
    scene_args: &SceneArgs,
    on_conflict: OnConflict,
    open: bool,
) -> anyhow::Result<()> {
    if images == 0 {
        return Err(anyhow::anyhow!("Number of images must be at least 1"));
    }
    let config = scene_args.scene_config().await?;
    config.validate().context("Invalid scene configuration")?;

    smol::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create directory \"{}\"", output_dir.display()))?;
    validators::path_is_dir(output_dir)?;

    let seed = scene_args.seed.unwrap_or_else(random_seed);
    tracing::info!(seed, images, "generating dataset");

    let output_dir_disp = output_dir.display().to_string();
    let progressbar = cli::new_progressbar(format!(
        "Generating {images} images into \"{output_dir_disp}\""
    ));

    if let Err(e) = generate_dataset(output_dir, images, &config, seed, on_conflict).await {
        let abandon_msg = format!("Generating into \"{output_dir_disp}\" failed, Err: {e:?}");
        tracing::warn!(seed, "generating dataset failed");
        if progressbar.is_hidden() {
            println!("{abandon_msg}");
        }
        progressbar.abandon_with_message(abandon_msg);
        return Err(e);
    } else {
        let finish_msg = format!("Generated {images} images into \"{output_dir_disp}\" (seed {seed})");
        if progressbar.is_hidden() {
            println!("{finish_msg}");
        }
        progressbar.finish_with_message(finish_msg);
    }

    if open {
        cli::open_file_default_app(output_dir)?;
    }
    Ok(())
}

pub(crate) async fn generate_dataset(
    output_dir: &Path,
    images: usize,
    config: &SceneConfig,
    seed: u64,
    on_conflict: OnConflict,
) -> anyhow::Result<()> {
    let seeds = seed_chain(seed, images);

    // each image gets its own rng, so composing in parallel stays reproducible
    let rendered = seeds
        .par_iter()
        .map(|&seed| -> anyhow::Result<(u64, Scene, RgbImage)> {
            let scene = Scene::generate(&mut new_rng_default_pcg64(Some(seed)), config)?;
            let image = scene.render();
            Ok((seed, scene, image))
        })
        .collect::<anyhow::Result<Vec<(u64, Scene, RgbImage)>>>()?;

    let mut on_conflict_overwrite = None;
    let mut records = Vec::with_capacity(images);
    for (i, (seed, scene, image)) in rendered.iter().enumerate() {
        let image_file = output_dir.join(image_file_name(i));
        let Some(image_file) =
            cli::check_file_conflict(&image_file, on_conflict, &mut on_conflict_overwrite)?
        else {
            continue;
        };

        let bytes = encode_image(image, ImageFormat::Png)?;
        cli::create_overwrite_file_w_bytes(&image_file, &bytes)
            .await
            .with_context(|| format!("Failed to write image \"{}\"", image_file.display()))?;

        records.push(LabelRecord {
            file: file_name_string(&image_file)?,
            seed: *seed,
            scene,
        });
    }

    let labels_file = output_dir.join(LABELS_FILE_NAME);
    if let Some(labels_file) =
        cli::check_file_conflict(&labels_file, on_conflict, &mut on_conflict_overwrite)?
    {
        let labels = serde_json::to_vec_pretty(&records)?;
        cli::create_overwrite_file_w_bytes(&labels_file, &labels)
            .await
            .with_context(|| format!("Failed to write labels \"{}\"", labels_file.display()))?;
    }
    Ok(())
}

/// `count` seeds, starting with `seed` and each derived from its predecessor.
pub(crate) fn seed_chain(seed: u64, count: usize) -> Vec<u64> {
    std::iter::successors(Some(seed), |prev| Some(seed_advance(*prev)))
        .take(count)
        .collect()
}

pub(crate) fn image_file_name(index: usize) -> String {
    format!("image_{index:05}.png")
}

pub(crate) fn encode_image(image: &RgbImage, format: ImageFormat) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .with_context(|| format!("Failed to encode image as {format:?}"))?;
    Ok(bytes)
}

pub(crate) fn file_name_string(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .with_context(|| format!("Path \"{}\" has no file name", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds() {
        let seeds = seed_chain(5, 4);

        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds[0], 5);
        assert_eq!(seeds[1], seed_advance(5));
        assert_eq!(seeds[3], seed_advance(seeds[2]));
        assert!(seed_chain(5, 0).is_empty());
    }

    #[test]
    fn writes_images_and_labels() {
        let dir = tempfile::tempdir().unwrap();
        let config = SceneConfig {
            canvas_size: 40,
            shape_count: 2,
            ..Default::default()
        };

        smol::block_on(generate_dataset(
            dir.path(),
            3,
            &config,
            1,
            OnConflict::Overwrite,
        ))
        .unwrap();

        for i in 0..3 {
            let image = image::open(dir.path().join(image_file_name(i)))
                .unwrap()
                .to_rgb8();
            assert_eq!(image.dimensions(), (40, 40));
        }

        let labels: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join(LABELS_FILE_NAME)).unwrap(),
        )
        .unwrap();
        let records = labels.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["file"], "image_00000.png");
        assert_eq!(records[0]["seed"], 1);
        assert_eq!(records[2]["scene"]["shapes"].as_array().unwrap().len(), 2);

        // the labels describe the written images
        let scene: Scene = serde_json::from_value(records[1]["scene"].clone()).unwrap();
        let image = image::open(dir.path().join(image_file_name(1)))
            .unwrap()
            .to_rgb8();
        assert_eq!(scene.render(), image);
    }

    #[test]
    fn skip_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join(image_file_name(0));
        std::fs::write(&existing, b"keep").unwrap();

        smol::block_on(generate_dataset(
            dir.path(),
            2,
            &SceneConfig::default(),
            2,
            OnConflict::Skip,
        ))
        .unwrap();

        assert_eq!(std::fs::read(&existing).unwrap(), b"keep");
        let labels: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join(LABELS_FILE_NAME)).unwrap(),
        )
        .unwrap();
        assert_eq!(labels.as_array().unwrap().len(), 1);
        assert_eq!(labels[0]["file"], "image_00001.png");
    }

    #[test]
    fn invalid_config_creates_no_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("out");

        let no_shapes = SceneArgs {
            shapes: Some(0),
            ..Default::default()
        };
        assert!(smol::block_on(run_generate(
            &output_dir,
            2,
            &no_shapes,
            OnConflict::Overwrite,
            false,
        ))
        .is_err());
        assert!(!output_dir.exists());

        let tiny_canvas = SceneArgs {
            canvas_size: Some(12),
            ..Default::default()
        };
        assert!(smol::block_on(run_generate(
            &output_dir,
            2,
            &tiny_canvas,
            OnConflict::Overwrite,
            false,
        ))
        .is_err());
        assert!(!output_dir.exists());

        let config_file = dir.path().join("missing.json");
        let missing_config = SceneArgs {
            config: Some(config_file),
            ..Default::default()
        };
        assert!(smol::block_on(run_generate(
            &output_dir,
            2,
            &missing_config,
            OnConflict::Overwrite,
            false,
        ))
        .is_err());
        assert!(!output_dir.exists());
    }

    #[test]
    fn generates_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("out");
        let scene_args = SceneArgs {
            canvas_size: Some(30),
            shapes: Some(1),
            seed: Some(3),
            ..Default::default()
        };

        smol::block_on(run_generate(
            &output_dir,
            2,
            &scene_args,
            OnConflict::Overwrite,
            false,
        ))
        .unwrap();

        assert!(output_dir.join(image_file_name(1)).is_file());
        assert!(output_dir.join(LABELS_FILE_NAME).is_file());
    }
}
