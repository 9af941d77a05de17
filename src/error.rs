use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Network-level failure: the request never produced a decodable body.
    #[error("Error de conexión: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered but reported `success: false`.
    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    Validation(String),

    #[error("El archivo es demasiado grande. Máximo 5MB.")]
    FileTooLarge,

    #[error("Tipo de archivo no permitido: {0}")]
    UnsupportedFileType(String),

    #[error("Producto no encontrado: {0}")]
    ProductNotFound(i64),

    #[error("Error leyendo archivo: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
