use anyhow::{Context, Result};
use log::{debug, warn};
use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::catalog::CatalogEntry;
use crate::gallery::{Gallery, Phase, SaveRequest};
use crate::gesture::TouchEvent;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ScrollJson {
    pub index: usize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SaveResultJson {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub enum CommandJson {
    Catalog(Vec<CatalogEntry>),
    Touch(TouchEvent),
    Scroll(ScrollJson),
    Shake,
    SaveResult(SaveResultJson),
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WallpaperJson {
    pub id: u64,
    pub author: String,
    pub url: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub enum EventJson {
    Loading,
    Selected(Vec<WallpaperJson>),
    Save(SaveRequest),
    Saved,
    SaveFailed(String),
    Error(String),
}

fn write_json<T: Serialize, W: Write>(output: &mut W, obj: &T) -> Result<()> {
    serde_json::to_writer(&mut *output, obj)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn read_json<T: DeserializeOwned, R: BufRead>(input: &mut R) -> Result<Option<T>> {
    let mut line_buffer = String::new();

    loop {
        line_buffer.clear();
        if input.read_line(&mut line_buffer)? == 0 {
            return Ok(None);
        }

        if !line_buffer.trim().is_empty() {
            break;
        }
    }

    let json = serde_json::from_str(&line_buffer)
        .with_context(|| format!("bad command: {}", line_buffer.trim()))?;

    Ok(Some(json))
}

pub fn selected(gallery: &Gallery) -> EventJson {
    EventJson::Selected(
        gallery
            .walls()
            .iter()
            .map(|wall| WallpaperJson {
                id: wall.id,
                author: wall.author.clone(),
                url: gallery.image_url(wall),
            })
            .collect(),
    )
}

/// Applies one command to the gallery, returning the event to report, if any.
pub fn handle<R: Rng + ?Sized>(
    gallery: &mut Gallery,
    rng: &mut R,
    command: CommandJson,
) -> Option<EventJson> {
    match command {
        CommandJson::Catalog(catalog) => {
            if let Err(err) = gallery.load(rng, &catalog) {
                warn!("{err}");
                return Some(EventJson::Error(err.to_string()));
            }

            Some(selected(gallery))
        }
        CommandJson::Touch(touch) => gallery.touch_grant(touch).map(EventJson::Save),
        CommandJson::Scroll(ScrollJson { index }) => {
            gallery.scroll_to(index);
            None
        }
        CommandJson::Shake => {
            gallery.shake();
            Some(EventJson::Loading)
        }
        CommandJson::SaveResult(SaveResultJson { ok, error }) => {
            let result = if ok {
                Ok(())
            } else {
                Err(error.as_deref().unwrap_or("unknown error"))
            };

            if !gallery.save_finished(result) {
                return None;
            }

            Some(match result {
                Ok(()) => EventJson::Saved,
                Err(err) => EventJson::SaveFailed(err.to_owned()),
            })
        }
    }
}

/// Feeds line-delimited commands to the gallery until the input runs out.
pub fn run<R, I, O>(gallery: &mut Gallery, rng: &mut R, mut input: I, mut output: O) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let initial = match gallery.phase() {
        Phase::Loading => EventJson::Loading,
        Phase::Loaded { .. } => selected(gallery),
    };
    write_json(&mut output, &initial)?;

    while let Some(command) = read_json::<CommandJson, _>(&mut input)? {
        debug!("{command:?}");

        if let Some(event) = handle(gallery, rng, command) {
            write_json(&mut output, &event)?;
        }
    }

    Ok(())
}
