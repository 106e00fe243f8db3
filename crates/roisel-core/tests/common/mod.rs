#![allow(dead_code)]

use std::path::{Path, PathBuf};

use roisel_core::io::bruker::{DATA_FILE, RECO_FILE, VISU_PARS_FILE};

/// Build a `visu_pars` file body.
///
/// `word_type` / `byte_order` take the ParaVision spellings, e.g.
/// `_16BIT_SGN_INT` and `littleEndian`.
pub fn build_visu_pars(
    size: &[usize],
    frame_count: usize,
    word_type: &str,
    byte_order: &str,
    slope: Option<&[f64]>,
) -> String {
    let mut text = String::new();
    text.push_str("##TITLE=Parameter List, ParaVision 6.0.1\n");
    text.push_str("##JCAMPDX=4.24\n");
    text.push_str("$$ @vis= VisuCoreSize\n");
    text.push_str(&format!("##$VisuCoreFrameCount={frame_count}\n"));
    text.push_str(&format!("##$VisuCoreDim={}\n", size.len()));
    text.push_str(&format!("##$VisuCoreSize=( {} )\n", size.len()));
    text.push_str(&join(size));
    text.push('\n');
    text.push_str(&format!("##$VisuCoreWordType={word_type}\n"));
    text.push_str(&format!("##$VisuCoreByteOrder={byte_order}\n"));
    if let Some(slope) = slope {
        text.push_str(&format!("##$VisuCoreDataSlope=( {} )\n", slope.len()));
        text.push_str(&join(slope));
        text.push('\n');
    }
    text.push_str("##$VisuSubjectName=( 64 )\n<Phantom>\n");
    text.push_str("##END=\n");
    text
}

/// Build a `reco` file body.
pub fn build_reco(size: &[usize], word_type: &str, byte_order: &str) -> String {
    format!(
        "##TITLE=Parameter List\n##$RECO_size=( {} )\n{}\n##$RECO_wordtype={word_type}\n\
         ##$RECO_byte_order={byte_order}\n##END=\n",
        size.len(),
        join(size)
    )
}

/// Lay out `<root>/<serie>/pdata/1/{2dseq,<param_file>}` and return the `2dseq` path.
pub fn write_dataset(
    root: &Path,
    serie: u32,
    param_file: &str,
    params: &str,
    data: &[u8],
) -> PathBuf {
    let dir = root.join(serie.to_string()).join("pdata").join("1");
    std::fs::create_dir_all(&dir).expect("create dataset dir");
    std::fs::write(dir.join(param_file), params).expect("write params");
    let path = dir.join(DATA_FILE);
    std::fs::write(&path, data).expect("write 2dseq");
    path
}

/// Mono 16-bit little-endian dataset described by `visu_pars`.
pub fn write_i16_dataset(root: &Path, serie: u32, size: &[usize], frames: usize, samples: &[i16]) -> PathBuf {
    let params = build_visu_pars(size, frames, "_16BIT_SGN_INT", "littleEndian", None);
    write_dataset(root, serie, VISU_PARS_FILE, &params, &i16_le_bytes(samples))
}

/// Same geometry described only by `reco`.
pub fn write_reco_dataset(root: &Path, serie: u32, size: &[usize], samples: &[i16]) -> PathBuf {
    let params = build_reco(size, "_16BIT_SGN_INT", "littleEndian");
    write_dataset(root, serie, RECO_FILE, &params, &i16_le_bytes(samples))
}

pub fn i16_le_bytes(values: &[i16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
