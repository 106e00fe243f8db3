use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use memmap2::Mmap;
use ndarray::Array2;
use tracing::{info, warn};

use crate::error::{Result, RoiselError};
use crate::frame::Frame;
use crate::io::jcamp::JcampParams;

/// Name of the processed image file inside a `pdata/<n>` directory.
pub const DATA_FILE: &str = "2dseq";
/// Visualisation parameters, the primary geometry source.
pub const VISU_PARS_FILE: &str = "visu_pars";
/// Reconstruction parameters, used when `visu_pars` is absent.
pub const RECO_FILE: &str = "reco";

/// Sample encoding of a `2dseq` file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordType {
    U8,
    I16,
    I32,
    F32,
}

impl WordType {
    pub fn from_param(value: &str) -> Result<Self> {
        match value {
            "_8BIT_UNSGN_INT" => Ok(Self::U8),
            "_16BIT_SGN_INT" => Ok(Self::I16),
            "_32BIT_SGN_INT" => Ok(Self::I32),
            "_32BIT_FLOAT" => Ok(Self::F32),
            other => Err(RoiselError::UnsupportedWordType(other.to_string())),
        }
    }

    /// Bytes per sample.
    pub fn size(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8 => write!(f, "8-bit unsigned"),
            Self::I16 => write!(f, "16-bit signed"),
            Self::I32 => write!(f, "32-bit signed"),
            Self::F32 => write!(f, "32-bit float"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn from_param(name: &str, value: &str) -> Result<Self> {
        match value {
            "littleEndian" => Ok(Self::Little),
            "bigEndian" => Ok(Self::Big),
            other => Err(RoiselError::InvalidParameter {
                name: name.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Which parameter file described the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamSource {
    VisuPars,
    Reco,
}

impl fmt::Display for ParamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VisuPars => write!(f, "{VISU_PARS_FILE}"),
            Self::Reco => write!(f, "{RECO_FILE}"),
        }
    }
}

/// Geometry and encoding of a `2dseq` file.
#[derive(Clone, Debug)]
pub struct DatasetInfo {
    pub path: PathBuf,
    /// Core dimensions, fastest-varying first.
    pub core_size: Vec<usize>,
    pub frame_count: usize,
    pub word_type: WordType,
    pub endianness: Endianness,
    /// Scaling of the first frame: `value * slope + offset`.
    pub slope: f64,
    pub offset: f64,
    pub source: ParamSource,
    pub subject: Option<String>,
    pub study: Option<String>,
}

impl DatasetInfo {
    /// Shape `(rows, cols)` of the `[:, :, 0, 0]` plane.
    pub fn plane_shape(&self) -> (usize, usize) {
        (self.core_size[0], self.core_size[1])
    }

    /// `None` when the core sizes overflow `usize`.
    pub fn samples_per_frame(&self) -> Option<usize> {
        checked_product(&self.core_size)
    }

    pub fn expected_byte_size(&self) -> Option<usize> {
        self.samples_per_frame()?
            .checked_mul(self.frame_count)?
            .checked_mul(self.word_type.size())
    }
}

/// Memory-mapped ParaVision `2dseq` reader.
pub struct BrukerDataset {
    mmap: Mmap,
    pub info: DatasetInfo,
}

impl BrukerDataset {
    /// Open a `2dseq` file and read its geometry from the sibling parameter files.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let file_len = file.metadata()?.len() as usize;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let info = read_info(path, dir, file_len)?;

        let expected = info.expected_byte_size().ok_or_else(overflow_error)?;
        if expected == 0 {
            return Err(RoiselError::InvalidDataset(format!(
                "Empty dataset geometry {:?} x {} frames",
                info.core_size, info.frame_count
            )));
        }
        if file_len != expected {
            return Err(RoiselError::InvalidDataset(format!(
                "{} holds {} bytes, parameters describe {} bytes",
                path.display(),
                file_len,
                expected
            )));
        }

        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap, info })
    }

    /// Decode the `[:, :, 0, 0]` plane with the first frame's slope and offset applied.
    pub fn read_plane(&self) -> Result<Frame> {
        let (rows, cols) = self.info.plane_shape();
        let word = self.info.word_type;
        let size = word.size();
        let endianness = self.info.endianness;
        let slope = self.info.slope;
        let offset = self.info.offset;

        // The first dimension varies fastest on disk, so [i, j] is sample i + j * rows.
        let data = Array2::from_shape_fn((rows, cols), |(i, j)| {
            let start = (i + j * rows) * size;
            let raw = decode_sample(&self.mmap[start..start + size], word, endianness);
            (raw * slope + offset) as f32
        });

        Ok(Frame::new(data))
    }
}

/// Open a dataset and return its first plane normalized by its own maximum.
pub fn load_normalized_frame(path: &Path) -> Result<Frame> {
    let dataset = BrukerDataset::open(path)?;
    let mut frame = dataset.read_plane()?;

    if !frame.normalize_by_max() {
        warn!(
            path = %path.display(),
            "Frame maximum is not positive, intensities left unnormalized"
        );
    }

    info!(
        path = %path.display(),
        rows = frame.height(),
        cols = frame.width(),
        word_type = %dataset.info.word_type,
        source = %dataset.info.source,
        "Dataset frame loaded"
    );
    Ok(frame)
}

fn read_info(path: &Path, dir: &Path, file_len: usize) -> Result<DatasetInfo> {
    let visu_path = dir.join(VISU_PARS_FILE);
    if visu_path.exists() {
        return info_from_visu_pars(path, &JcampParams::open(&visu_path)?);
    }

    let reco_path = dir.join(RECO_FILE);
    if reco_path.exists() {
        return info_from_reco(path, &JcampParams::open(&reco_path)?, file_len);
    }

    Err(RoiselError::InvalidDataset(format!(
        "No {VISU_PARS_FILE} or {RECO_FILE} next to {}",
        path.display()
    )))
}

fn info_from_visu_pars(path: &Path, params: &JcampParams) -> Result<DatasetInfo> {
    let core_size = params
        .require("VisuCoreSize")?
        .as_usize_list("VisuCoreSize")?;
    check_core_size(&core_size)?;

    let frame_count = match params.get("VisuCoreFrameCount") {
        Some(v) => v.as_usize("VisuCoreFrameCount")?,
        None => 1,
    };
    let word_type = WordType::from_param(params.require("VisuCoreWordType")?.as_str())?;
    let endianness = Endianness::from_param(
        "VisuCoreByteOrder",
        params.require("VisuCoreByteOrder")?.as_str(),
    )?;

    let slope = first_or(params, "VisuCoreDataSlope", 1.0)?;
    let offset = first_or(params, "VisuCoreDataOffs", 0.0)?;

    Ok(DatasetInfo {
        path: path.to_path_buf(),
        core_size,
        frame_count,
        word_type,
        endianness,
        slope,
        offset,
        source: ParamSource::VisuPars,
        subject: params.string("VisuSubjectName"),
        study: params.string("VisuStudyId"),
    })
}

fn info_from_reco(path: &Path, params: &JcampParams, file_len: usize) -> Result<DatasetInfo> {
    let core_size = params.require("RECO_size")?.as_usize_list("RECO_size")?;
    check_core_size(&core_size)?;

    let word_type = WordType::from_param(params.require("RECO_wordtype")?.as_str())?;
    let endianness = Endianness::from_param(
        "RECO_byte_order",
        params.require("RECO_byte_order")?.as_str(),
    )?;

    // reco does not record the frame count; derive it from the file size.
    let frame_bytes = checked_product(&core_size)
        .and_then(|n| n.checked_mul(word_type.size()))
        .ok_or_else(overflow_error)?;
    let frame_count = if frame_bytes == 0 { 0 } else { file_len / frame_bytes };

    Ok(DatasetInfo {
        path: path.to_path_buf(),
        core_size,
        frame_count,
        word_type,
        endianness,
        slope: 1.0,
        offset: 0.0,
        source: ParamSource::Reco,
        subject: None,
        study: None,
    })
}

fn check_core_size(core_size: &[usize]) -> Result<()> {
    if core_size.len() < 2 {
        return Err(RoiselError::InvalidDataset(format!(
            "Expected at least 2 core dimensions, got {core_size:?}"
        )));
    }
    Ok(())
}

fn checked_product(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

fn overflow_error() -> RoiselError {
    RoiselError::InvalidDataset("Dataset dimensions overflow".into())
}

fn first_or(params: &JcampParams, name: &str, default: f64) -> Result<f64> {
    match params.get(name) {
        Some(v) => Ok(v.as_f64_list(name)?.first().copied().unwrap_or(default)),
        None => Ok(default),
    }
}

fn decode_sample(bytes: &[u8], word: WordType, endianness: Endianness) -> f64 {
    match (word, endianness) {
        (WordType::U8, _) => bytes[0] as f64,
        (WordType::I16, Endianness::Little) => LittleEndian::read_i16(bytes) as f64,
        (WordType::I16, Endianness::Big) => BigEndian::read_i16(bytes) as f64,
        (WordType::I32, Endianness::Little) => LittleEndian::read_i32(bytes) as f64,
        (WordType::I32, Endianness::Big) => BigEndian::read_i32(bytes) as f64,
        (WordType::F32, Endianness::Little) => LittleEndian::read_f32(bytes) as f64,
        (WordType::F32, Endianness::Big) => BigEndian::read_f32(bytes) as f64,
    }
}
