use ::std::{
    fs::{create_dir_all, File},
    io::{self, BufWriter, Write},
    path::Path,
};
use langram_classic::{Metrics, ModelsStorage, StorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Io error")]
    Io(#[from] io::Error),
    #[error("Storage error")]
    Storage(#[from] StorageError),
    #[error("Json error")]
    Json(#[from] serde_json::Error),
}

fn create_file(file_path: &Path) -> io::Result<BufWriter<File>> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent)?;
    }
    File::create(file_path).map(BufWriter::new)
}

/// Writes `{"ac": .., "fscore": ..}`
pub fn write_metrics(metrics: &Metrics, mut writer: impl Write) -> Result<(), WriteError> {
    serde_json::to_writer(&mut writer, metrics)?;
    writer.flush()?;
    Ok(())
}

pub fn write_scores_file(metrics: &Metrics, file_path: &Path) -> Result<(), WriteError> {
    write_metrics(metrics, create_file(file_path)?)
}

/// Writes compressed models, readable by [`ModelsStorage::read`]
pub fn write_model_file(
    models_storage: &ModelsStorage,
    file_path: &Path,
) -> Result<(), WriteError> {
    let mut file = create_file(file_path)?;
    models_storage.write(&mut file)?;
    file.flush()?;
    Ok(())
}
