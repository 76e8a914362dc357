mod order_index;
mod raw_sorted_map;

pub(crate) use raw_sorted_map::RawSortedMap;
