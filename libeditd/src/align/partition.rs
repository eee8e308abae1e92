use crate::structs::ChunkSpan;
use crate::WavefrontError;

/// Split the interleaved index range `[0, total_len)` of one diagonal into worker chunks.
///
/// Every chunk starts on an even index so that it owns whole (computed, merge) pairs. The chunk
/// size is the larger of an even share per thread and `min_chunk_size`, rounded up to an even
/// number. A trailing remainder shorter than `min_chunk_size` is folded into the last chunk.
pub fn partition_chunks(
    total_len: usize,
    thread_count: usize,
    min_chunk_size: usize,
) -> Result<Vec<ChunkSpan>, WavefrontError> {
    if thread_count == 0 {
        return Err(WavefrontError::ZeroThreads);
    }
    if min_chunk_size == 0 {
        return Err(WavefrontError::ZeroChunkSize);
    }

    let mut chunk_size = total_len.div_ceil(thread_count).max(min_chunk_size);
    chunk_size += chunk_size % 2;

    let mut spans: Vec<ChunkSpan> = Vec::with_capacity(thread_count);
    let mut start_idx = 0;

    while start_idx < total_len {
        let remainder = total_len.saturating_sub(start_idx + chunk_size);
        let stop_idx = if remainder < min_chunk_size {
            total_len
        } else {
            start_idx + chunk_size
        };

        spans.push(ChunkSpan {
            start_idx,
            stop_idx,
        });
        start_idx = stop_idx;
    }

    if spans.len() > thread_count {
        return Err(WavefrontError::TooManyChunks {
            total_len,
            chunks: spans.len(),
            threads: thread_count,
        });
    }

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn spans(pairs: &[(usize, usize)]) -> Vec<ChunkSpan> {
        pairs
            .iter()
            .map(|&(start_idx, stop_idx)| ChunkSpan {
                start_idx,
                stop_idx,
            })
            .collect()
    }

    #[test]
    fn test_single_thread() -> anyhow::Result<()> {
        assert_eq!(partition_chunks(9, 1, 1)?, spans(&[(0, 9)]));
        Ok(())
    }

    #[test]
    fn test_even_split() -> anyhow::Result<()> {
        // 15 / 4 rounds up to 4
        assert_eq!(
            partition_chunks(15, 4, 1)?,
            spans(&[(0, 4), (4, 8), (8, 12), (12, 15)])
        );
        Ok(())
    }

    #[test]
    fn test_odd_share_rounds_up() -> anyhow::Result<()> {
        // 9 / 4 rounds up to 3, then to 4 to stay even-aligned
        assert_eq!(partition_chunks(9, 4, 1)?, spans(&[(0, 4), (4, 8), (8, 9)]));
        Ok(())
    }

    #[test]
    fn test_min_chunk_size_dominates() -> anyhow::Result<()> {
        assert_eq!(partition_chunks(7, 16, 64)?, spans(&[(0, 7)]));
        assert_eq!(
            partition_chunks(31, 16, 10)?,
            spans(&[(0, 10), (10, 20), (20, 31)])
        );
        Ok(())
    }

    #[test]
    fn test_small_remainder_is_absorbed() -> anyhow::Result<()> {
        // chunks of 6; the 3 cells left after (6, 12) are fewer than 5, so they join it
        assert_eq!(partition_chunks(15, 8, 5)?, spans(&[(0, 6), (6, 15)]));
        Ok(())
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(
            partition_chunks(9, 0, 1),
            Err(WavefrontError::ZeroThreads)
        ));
        assert!(matches!(
            partition_chunks(9, 4, 0),
            Err(WavefrontError::ZeroChunkSize)
        ));
    }

    #[test]
    fn test_partition_properties() -> anyhow::Result<()> {
        for total_len in 1..=257 {
            for thread_count in 1..=16 {
                for min_chunk_size in [1, 2, 3, 4, 7, 16, 33, 100, 1000] {
                    let chunks = partition_chunks(total_len, thread_count, min_chunk_size)?;

                    check!(!chunks.is_empty());
                    check!(chunks.len() <= thread_count);
                    check!(chunks[0].start_idx == 0);
                    check!(chunks[chunks.len() - 1].stop_idx == total_len);

                    for chunk in chunks.iter() {
                        check!(!chunk.is_empty());
                        check!(chunk.start_idx % 2 == 0);
                    }

                    for pair in chunks.windows(2) {
                        check!(pair[0].stop_idx == pair[1].start_idx);
                    }
                }
            }
        }
        Ok(())
    }
}
