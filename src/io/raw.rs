/// Read / write float arrays as raw binary

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use ndarray::{Array2, ArrayView2};

use crate::Intensityf32;

pub fn write(data: impl Iterator<Item = f32>, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut buf = BufWriter::new(file);
    for datum in data {
        buf.write_all(&datum.to_le_bytes())?;
    }
    Ok(())
}

type IORes<T> = std::io::Result<T>;
pub fn read<'a>(path: &Path) -> IORes<impl Iterator<Item = IORes<f32>> + 'a> {
    let file = File::open(path)?;
    let mut buf = BufReader::new(file);
    let mut buffer = [0; 4];

    Ok(std::iter::from_fn(move || {
        use std::io::ErrorKind::UnexpectedEof;
        match buf.read_exact(&mut buffer) {
            Ok(()) => Some(Ok(f32::from_le_bytes(buffer))),
            Err(e) if e.kind() == UnexpectedEof => None,
            Err(e) => Some(Err(e)),
        }
    }))
}

/// Write a 2-D grid in row-major order. The shape is not stored in the
/// file; callers carry it alongside, as with any `.raw` image.
pub fn write_array2(data: ArrayView2<'_, Intensityf32>, path: &Path) -> std::io::Result<()> {
    write(data.iter().copied(), path)
}

/// Read a row-major 2-D grid of the given `(rows, cols)` shape.
pub fn read_array2(
    path: &Path,
    shape: (usize, usize),
) -> Result<Array2<Intensityf32>, Box<dyn std::error::Error>> {
    let data: Vec<f32> = read(path)?.collect::<Result<_, _>>()?;
    Ok(Array2::from_shape_vec(shape, data)?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_io_roundtrip() -> std::io::Result<()> {
        use tempfile::tempdir;
        #[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

        // Harmless temporary location for output file
        let dir = tempdir()?;
        let file_path = dir.path().join("test.bin");

        // Some test data
        let original_data = vec![1.23, 4.56, 7.89];

        // Write data to file
        write(original_data.iter().copied(), &file_path)?;

        // Read data back from file
        let reloaded_data: Vec<_> = read(&file_path)?
            .collect::<Result<_, _>>()?;

        // Check that roundtrip didn't corrupt the data
        assert_eq!(original_data, reloaded_data);
        Ok(())
    }

    #[test]
    fn array2_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        use tempfile::tempdir;
        #[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

        let dir = tempdir()?;
        let file_path = dir.path().join("sinogram.raw");

        let original = ndarray::array![[1.0, 2.0, 3.0],
                                       [4.0, 5.0, 6.0]];
        write_array2(original.view(), &file_path)?;
        let reloaded = read_array2(&file_path, (2, 3))?;

        assert_eq!(original, reloaded);
        Ok(())
    }

    #[test]
    fn wrong_shape_is_an_error() -> std::io::Result<()> {
        use tempfile::tempdir;
        let dir = tempdir()?;
        let file_path = dir.path().join("short.raw");
        write([1.0, 2.0, 3.0].into_iter(), &file_path)?;
        assert!(read_array2(&file_path, (2, 2)).is_err());
        Ok(())
    }
}
