use clap::Parser;
use color_eyre::eyre::WrapErr;
use indicatif::{ProgressBar, ProgressStyle};
use notification_preview::{
    ImageFetcher, NotificationInput, Picture, PreviewContent, PreviewMode, RenderedPane,
    render_pane,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Renders collapsed and expanded notification previews without a window.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Notification title
    #[arg(long, conflicts_with = "input")]
    title: Option<String>,

    /// Notification body
    #[arg(long, conflicts_with = "input")]
    body: Option<String>,

    /// URL of the big picture (PNG, JPEG, WebP or SVG)
    #[arg(long, conflicts_with = "input")]
    image_url: Option<String>,

    /// RON file holding a `NotificationInput`
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory that receives collapsed.png and expanded.png
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl Args {
    fn notification(&self) -> color_eyre::Result<NotificationInput> {
        if let Some(path) = &self.input {
            let ron_string = fs::read_to_string(path)
                .wrap_err_with(|| format!("read input file {}", path.display()))?;
            return ron::from_str(&ron_string)
                .wrap_err_with(|| format!("parse input file {}", path.display()));
        }

        Ok(NotificationInput {
            title: self.title.clone().unwrap_or_default(),
            body: self.body.clone().unwrap_or_default(),
            image_url: self.image_url.clone(),
        })
    }
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_pane(pane: &RenderedPane) {
    println!("{}", pane.mode.label());
    println!("  title: {}", pane.title);
    println!("  body:  {}", pane.body);
    match &pane.picture {
        Picture::Image(bitmap) => println!("  image: {}x{}", bitmap.width(), bitmap.height()),
        Picture::Placeholder => println!("  image: (placeholder)"),
    }
}

fn write_picture(pane: &RenderedPane, out_dir: &Path) -> color_eyre::Result<Option<PathBuf>> {
    let Picture::Image(bitmap) = &pane.picture else {
        return Ok(None);
    };

    let path = out_dir.join(format!("{}.png", pane.mode.name()));
    bitmap
        .as_image()
        .save(&path)
        .wrap_err_with(|| format!("write {}", path.display()))?;
    Ok(Some(path))
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let args = Args::parse();
    let input = args.notification()?;

    let fetcher = ImageFetcher::default();
    let image = match input.trimmed_url() {
        Some(url) => {
            let spinner = fetch_spinner(url);
            let image = fetcher.fetch(url).await;
            spinner.finish_and_clear();

            if image.is_none() {
                eprintln!("warning: couldn't load the image from {url}, showing a placeholder");
            }
            image
        }
        None => None,
    };

    let content = PreviewContent {
        title: input.title,
        body: input.body,
        image,
    };

    if !args.out_dir.is_dir() {
        fs::create_dir_all(&args.out_dir)
            .wrap_err_with(|| format!("create {}", args.out_dir.display()))?;
    }

    for mode in PreviewMode::ALL {
        let pane = render_pane(&content, mode, mode.default_picture_box());

        print_pane(&pane);
        if let Some(path) = write_picture(&pane, &args.out_dir)? {
            println!("  wrote {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn inline_arguments_build_the_input() {
        let args = Args::parse_from([
            "render_preview",
            "--title",
            "Breaking News",
            "--image-url",
            "https://example.com/a.jpg",
        ]);
        let input = args.notification().unwrap();

        assert_eq!(input.title, "Breaking News");
        assert_eq!(input.body, "");
        assert_eq!(input.trimmed_url(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn input_file_conflicts_with_inline_title() {
        let result = Args::try_parse_from(["render_preview", "--input", "n.ron", "--title", "x"]);
        assert!(result.is_err());
    }
}
