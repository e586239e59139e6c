use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RamError {
    #[error("address 0x{0:02X} out of bounds, must be [0, 0x{1:02X})")]
    OutOfBounds(usize, usize),
}

pub type Result<T> = std::result::Result<T, RamError>;

/// Flat byte-addressable memory, zero-initialized at construction.
#[derive(Clone, Debug)]
pub struct Ram<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> Default for Ram<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Ram<N> {
    pub fn new() -> Self {
        Self { cells: [0; N] }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn read(&self, address: usize) -> Result<u8> {
        self.cells
            .get(address)
            .copied()
            .ok_or(RamError::OutOfBounds(address, N))
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
        match self.cells.get_mut(address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(RamError::OutOfBounds(address, N)),
        }
    }

    /// Bulk copy of a program image. Fails if any destination address would
    /// fall outside memory; on failure nothing is written.
    pub fn load(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        let end = offset + data.len();
        if end > N {
            return Err(RamError::OutOfBounds(end - 1, N));
        }
        self.cells[offset..end].copy_from_slice(data);
        tracing::trace!("loaded {} bytes at 0x{:02X}", data.len(), offset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_initialized() {
        let ram = Ram::<256>::new();
        for address in 0..ram.capacity() {
            assert_eq!(ram.read(address), Ok(0));
        }
    }

    #[test]
    fn test_write_then_read() {
        let mut ram = Ram::<256>::new();
        ram.write(0x10, 0xAB).unwrap();
        assert_eq!(ram.read(0x10), Ok(0xAB));
        assert_eq!(ram.read(0x11), Ok(0x00));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut ram = Ram::<256>::new();
        assert_eq!(ram.read(256), Err(RamError::OutOfBounds(256, 256)));
        assert_eq!(ram.write(256, 0xFF), Err(RamError::OutOfBounds(256, 256)));
        assert_eq!(ram.read(usize::MAX), Err(RamError::OutOfBounds(usize::MAX, 256)));
    }

    #[test]
    fn test_load_image() {
        let mut ram = Ram::<256>::new();
        ram.load(0, &[0x82, 0x00, 0x08]).unwrap();
        assert_eq!(ram.read(0), Ok(0x82));
        assert_eq!(ram.read(1), Ok(0x00));
        assert_eq!(ram.read(2), Ok(0x08));
        assert_eq!(ram.read(3), Ok(0x00));
    }

    #[test]
    fn test_load_too_large() {
        let mut ram = Ram::<4>::new();
        assert_eq!(
            ram.load(2, &[1, 2, 3]),
            Err(RamError::OutOfBounds(4, 4))
        );
        // Nothing was written before the bounds check.
        assert_eq!(ram.read(2), Ok(0));
        assert_eq!(ram.read(3), Ok(0));
    }
}
