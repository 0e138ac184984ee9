use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use jacobi_core::{Cell, Jacobi};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct DumpMeta {
    pub n: usize,
    pub m: usize,
    pub iters: usize,
    pub precision: &'static str,
    pub checksum: f64,
}

/// Writes `grid.bin` (row-major, little-endian) and `meta.json` into `dir`.
pub fn write_dump<T: Cell>(dir: &Path, jacobi: &Jacobi<T>) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let grid_path = dir.join("grid.bin");
    let mut grid_writer = BufWriter::new(
        File::create(&grid_path).with_context(|| format!("creating {}", grid_path.display()))?,
    );
    write_cells(&mut grid_writer, jacobi.field())?;
    grid_writer.flush()?;

    let meta = DumpMeta {
        n: jacobi.n(),
        m: jacobi.m(),
        iters: jacobi.iterations(),
        precision: T::NAME,
        checksum: jacobi.checksum(),
    };
    let meta_path = dir.join("meta.json");
    let mut meta_writer = BufWriter::new(
        File::create(&meta_path).with_context(|| format!("creating {}", meta_path.display()))?,
    );
    serde_json::to_writer_pretty(&mut meta_writer, &meta)?;
    meta_writer.write_all(b"\n")?;
    meta_writer.flush()?;
    Ok(())
}

fn write_cells<T: Cell, W: Write>(w: &mut W, v: &[T]) -> std::io::Result<()> {
    for &x in v {
        x.write_le(w)?;
    }
    Ok(())
}
