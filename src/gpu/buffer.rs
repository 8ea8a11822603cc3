//! Vertex, index and uniform buffers with automatic resizing
//!
//! Buffers grow with a 2x strategy when a write exceeds capacity, to
//! minimize reallocations.

use std::borrow::Cow;

use wgpu::util::DeviceExt;

/// Smallest buffer ever allocated, in bytes.
const MIN_CAPACITY: usize = 64;

/// What the buffer is bound as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Per-vertex attribute data.
    Vertex,
    /// `u16` triangle indices.
    Index,
    /// Shader uniform block.
    Uniform,
}

impl BufferKind {
    /// wgpu usage flags for this kind (always writable from the queue).
    pub fn usages(self) -> wgpu::BufferUsages {
        let usage = match self {
            Self::Vertex => wgpu::BufferUsages::VERTEX,
            Self::Index => wgpu::BufferUsages::INDEX,
            Self::Uniform => wgpu::BufferUsages::UNIFORM,
        };
        usage | wgpu::BufferUsages::COPY_DST
    }
}

/// Capacity to reallocate to when `needed` bytes exceed `current`: 2x the
/// request, at least 1 KiB more than before, 4-byte aligned.
pub fn grown_capacity(current: usize, needed: usize) -> usize {
    align_to_copy((needed * 2).max(current + 1024))
}

fn align_to_copy(len: usize) -> usize {
    let align = wgpu::COPY_BUFFER_ALIGNMENT as usize;
    len.div_ceil(align) * align
}

/// Queue writes must be a multiple of [`wgpu::COPY_BUFFER_ALIGNMENT`].
fn padded(data: &[u8]) -> Cow<'_, [u8]> {
    let aligned = align_to_copy(data.len());
    if aligned == data.len() {
        Cow::Borrowed(data)
    } else {
        let mut bytes = data.to_vec();
        bytes.resize(aligned, 0);
        Cow::Owned(bytes)
    }
}

/// A GPU buffer that can grow dynamically
///
/// Never shrinks (GPU buffers cannot be resized in place).
pub struct GpuBuffer {
    buffer: wgpu::Buffer,
    kind: BufferKind,
    capacity: usize, // Capacity in bytes
    len: usize,      // Current data length in bytes
    label: String,
}

impl GpuBuffer {
    /// Empty buffer with the given initial byte capacity.
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        kind: BufferKind,
        initial_capacity: usize,
    ) -> Self {
        let capacity = align_to_copy(initial_capacity.max(MIN_CAPACITY));

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: kind.usages(),
            mapped_at_creation: false,
        });
        log::debug!("created {kind:?} buffer '{label}' ({capacity} bytes)");

        Self {
            buffer,
            kind,
            capacity,
            len: 0,
            label: label.to_owned(),
        }
    }

    /// Buffer initialized from existing data.
    pub fn new_with_data<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        kind: BufferKind,
        data: &[T],
    ) -> Self {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let contents = padded(data_bytes);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: &contents,
            usage: kind.usages(),
        });
        log::debug!("created {kind:?} buffer '{label}' ({} bytes)", contents.len());

        Self {
            buffer,
            kind,
            capacity: contents.len(),
            len: data_bytes.len(),
            label: label.to_owned(),
        }
    }

    /// Write data to buffer, growing if necessary
    ///
    /// Returns `true` if buffer was reallocated (bind groups need recreation)
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        self.write_bytes(device, queue, bytemuck::cast_slice(data))
    }

    /// Write raw bytes to buffer, growing if necessary.
    ///
    /// Returns `true` if buffer was reallocated (bind groups need recreation).
    pub fn write_bytes(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[u8],
    ) -> bool {
        let contents = padded(data);
        let needed = contents.len();

        let reallocated = if needed > self.capacity {
            let new_capacity = grown_capacity(self.capacity, needed);

            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: new_capacity as u64,
                usage: self.kind.usages(),
                mapped_at_creation: false,
            });
            log::debug!(
                "grew buffer '{}' {} -> {new_capacity} bytes",
                self.label,
                self.capacity
            );

            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, &contents);
        }
        self.len = data.len();

        reallocated
    }

    /// Underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// How the buffer is bound.
    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Bytes of live data.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no data has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_doubles_with_floor() {
        assert_eq!(grown_capacity(64, 100), 1088);
        assert_eq!(grown_capacity(1024, 4000), 8000);
        assert_eq!(grown_capacity(64, 1030) % 4, 0);
    }

    #[test]
    fn padding_only_when_misaligned() {
        let aligned = [1u8, 2, 3, 4];
        assert!(matches!(padded(&aligned), Cow::Borrowed(_)));

        let indices: [u16; 3] = [0, 1, 2];
        let bytes = padded(bytemuck::cast_slice(&indices));
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[6..], &[0, 0]);
    }

    #[test]
    fn every_kind_is_queue_writable() {
        for kind in [BufferKind::Vertex, BufferKind::Index, BufferKind::Uniform] {
            assert!(kind.usages().contains(wgpu::BufferUsages::COPY_DST));
        }
        assert!(BufferKind::Index.usages().contains(wgpu::BufferUsages::INDEX));
    }
}
