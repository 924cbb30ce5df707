use std::slice;

#[derive(Debug, Copy, Clone)]
pub enum CastError {
    RaggedSlice,
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CastError {}

/// \[T\]::as_chunks isn't stable yet, so I wrote my own :)
pub fn as_chunks<T, const N: usize>(slice: &[T]) -> (&[[T; N]], &[T]) {
    // SAFETY: len * N is always less than or equal to slice.len()
    // len * N is also always guaranteed to be divisible by N
    // thus it is safe to create `len` arrays of length N from that slice
    let len = slice.len() / N;
    let (array_slice, remainder) = slice.split_at(len * N);
    let arrays = unsafe { slice::from_raw_parts(array_slice.as_ptr().cast(), len) };

    (arrays, remainder)
}

/// Cast a slice to a slice of arrays, panics if the arrays don't evenly divide the slice
#[rustfmt::skip]
pub fn cast_as_arrays<T, const N: usize>(slice: &[T]) -> &[[T; N]] {
    let (arrays, rmdr) = as_chunks(slice);
    assert!(rmdr.is_empty(), "Slice length does not evenly divide into arrays.");
    arrays
}

/// Cast a slice to a slice of arrays
pub fn try_cast_as_arrays<T, const N: usize>(slice: &[T]) -> Result<&[[T; N]], CastError> {
    let (arrays, rmdr) = as_chunks(slice);
    if !rmdr.is_empty() {
        return Err(CastError::RaggedSlice);
    }
    Ok(arrays)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_chunks() {
        let input: Vec<u8> = (0..10).collect();
        let (arrays, rmdr): (&[[u8; 4]], &[u8]) = as_chunks(&input[..]);
        assert_eq!(arrays, [[0, 1, 2, 3], [4, 5, 6, 7]]);
        assert_eq!(rmdr, [8, 9]);
    }

    #[test]
    fn test_cast_as_arrays() {
        let input: Vec<u32> = (0..16).collect();
        let arrays: &[[u32; 4]] = cast_as_arrays(&input[..]);
        assert_eq!(
            arrays,
            [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]
        );
    }

    #[test]
    #[should_panic]
    fn test_cast_as_arrays_size_mismatch_fails() {
        let input: Vec<u32> = (0..10).collect();
        assert_eq!(cast_as_arrays(&input[..]), [[0, 1, 2, 3], [4, 5, 6, 7]]);
    }

    #[test]
    fn test_try_cast_as_arrays() -> Result<(), CastError> {
        let input: Vec<u32> = (0..16).collect();
        let arrays: &[[u32; 4]] = try_cast_as_arrays(&input[..])?;
        assert_eq!(
            arrays,
            [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]
        );

        Ok(())
    }

    #[test]
    fn test_try_cast_as_arrays_size_mismatch_fails() {
        let input: Vec<u32> = (0..10).collect();
        assert!(try_cast_as_arrays::<_, 4>(&input[..]).is_err());
    }
}
