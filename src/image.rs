use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use ndarray::{Array2, Axis};

use crate::colour::*;
use crate::error::{Error, Result};

const ROWS: Axis = Axis(0);
const COLUMNS: Axis = Axis(1);

// targa header constants
const TGA_HEADER_LEN: usize = 18;
const TGA_UNCOMPRESSED_TRUE_COLOUR: u8 = 2;
const TGA_BITS_PER_PIXEL: u8 = 24;

// sibling of the target, renamed into place once complete
fn partial_path(filename: &Path) -> PathBuf {
    let mut partial = filename.as_os_str().to_owned();
    partial.push(".partial");
    PathBuf::from(partial)
}

fn write_then_rename(partial: &Path, filename: &Path, bytes: &[u8]) -> io::Result<()> {
    {
	let mut file = File::create(partial)?;
	file.write_all(bytes)?;
	file.sync_all()?;
    }
    fs::rename(partial, filename)
}

// rendered colours indexed (row, column), row 0 at the top
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer(Array2<Colour>);

impl Framebuffer {
    pub fn new(width: usize, height: usize, fill: Colour) -> Self {
	Framebuffer(Array2::from_elem((height, width), fill))
    }

    pub fn from_array(pixels: Array2<Colour>) -> Self {
	Framebuffer(pixels)
    }

    pub fn width(&self) -> usize {
	self.0.len_of(COLUMNS)
    }

    pub fn height(&self) -> usize {
	self.0.len_of(ROWS)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Colour> {
	self.0.get((row, column)).copied()
    }

    pub fn pixels_mut(&mut self) -> &mut Array2<Colour> {
	&mut self.0
    }

    // row-major, top row first
    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
	self.0.iter()
    }

    pub fn encode_ppm(&self) -> Vec<u8> {
	let mut result = vec![b'P', b'6', b'\n'];
	result.extend_from_slice(self.width().to_string().as_bytes());
	result.push(b' ');
	result.extend_from_slice(self.height().to_string().as_bytes());
	result.extend_from_slice(b"\n255\n");

	for colour in self.0.iter() {
	    result.extend_from_slice(&colour.to_rgb8());
	}
	result
    }

    // uncompressed true colour, bgr, bottom row first
    pub fn encode_tga(&self) -> Result<Vec<u8>> {
	let width = u16::try_from(self.width())
	    .map_err(|_| Error::InvalidSettings(format!("targa width {} is too large", self.width())))?;
	let height = u16::try_from(self.height())
	    .map_err(|_| Error::InvalidSettings(format!("targa height {} is too large", self.height())))?;

	let mut result = Vec::with_capacity(TGA_HEADER_LEN + 3 * self.0.len());
	result.push(0); // id length
	result.push(0); // no colour map
	result.push(TGA_UNCOMPRESSED_TRUE_COLOUR);
	result.extend_from_slice(&[0; 5]); // colour map spec
	result.extend_from_slice(&0u16.to_le_bytes()); // x origin
	result.extend_from_slice(&0u16.to_le_bytes()); // y origin
	result.extend_from_slice(&width.to_le_bytes());
	result.extend_from_slice(&height.to_le_bytes());
	result.push(TGA_BITS_PER_PIXEL);
	result.push(0); // descriptor, origin bottom left

	for row in self.0.axis_iter(ROWS).rev() {
	    for colour in row.iter() {
		let [r, g, b] = colour.to_rgb8();
		result.extend_from_slice(&[b, g, r]);
	    }
	}
	Ok(result)
    }

    // the format comes from the file extension
    pub fn save(&self, filename: &Path) -> Result<()> {
	let extension = filename
	    .extension()
	    .and_then(|e| e.to_str())
	    .map(str::to_ascii_lowercase)
	    .unwrap_or_default();
	let bytes = match extension.as_str() {
	    "tga" => self.encode_tga()?,
	    "ppm" => self.encode_ppm(),
	    _ => return Err(Error::UnsupportedFormat(filename.display().to_string())),
	};
	let partial = partial_path(filename);
	if let Err(error) = write_then_rename(&partial, filename, &bytes) {
	    // a half written image is never left behind
	    let _ = fs::remove_file(&partial);
	    return Err(error.into());
	}
	info!("wrote {}x{} image to {}", self.width(), self.height(), filename.display());
	Ok(())
    }
}
