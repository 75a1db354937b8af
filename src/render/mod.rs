//! Presenting data items to the person labeling them.

pub mod ascii;

pub use ascii::ascii_art;

use std::io::Write;

use reqwest::blocking::Client;

use crate::error::{LabelError, Result};
use crate::model::{Datum, ImageUrl};

/// Shows a datum to the labeler
pub trait Presenter {
    fn present(&mut self, datum: &Datum, out: &mut dyn Write) -> Result<()>;
}

/// Prints the datum's value as text
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present(&mut self, datum: &Datum, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", datum.value())?;
        Ok(())
    }
}

/// Downloads image data and prints it as ASCII art; other values as text
pub struct AsciiPresenter {
    client: Client,
    width: u32,
}

impl AsciiPresenter {
    pub fn new(client: Client, width: u32) -> Self {
        Self { client, width }
    }
}

impl Presenter for AsciiPresenter {
    fn present(&mut self, datum: &Datum, out: &mut dyn Write) -> Result<()> {
        let Some(dog) = datum.value().as_image() else {
            return TextPresenter.present(datum, out);
        };

        let bytes = download_image(&self.client, &dog.message)?;
        let art = ascii_art(&bytes, self.width)?;
        writeln!(out, "{}", art)?;
        Ok(())
    }
}

/// Fetch the raw bytes behind an image URL
pub fn download_image(client: &Client, url: &ImageUrl) -> Result<Vec<u8>> {
    log::debug!("Downloading image {}", url);
    let response = client
        .get(url.as_str())
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| LabelError::Fetch(format!("Failed to download {}: {}", url, e)))?;

    let bytes = response
        .bytes()
        .map_err(|e| LabelError::Fetch(format!("Failed to read image body: {}", e)))?;
    Ok(bytes.to_vec())
}
