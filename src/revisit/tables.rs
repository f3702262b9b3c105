use std::collections::HashMap;

/// Days in one repeat ground-track cycle.
pub const CYCLE_SLOTS: usize = 16;

// Paths imaged on each day of the cycle, day 1 first.
const LANDSAT_8_SLOTS: [&[u32]; CYCLE_SLOTS] = [
    &[110, 126, 142, 158, 174, 190, 206, 222, 5, 21, 37, 53, 69, 85],
    &[101, 117, 133, 149, 165, 181, 197, 213, 229, 12, 28, 44, 60, 76, 92],
    &[108, 124, 140, 156, 172, 188, 204, 220, 3, 19, 35, 51, 67, 83],
    &[99, 115, 131, 147, 163, 179, 195, 211, 227, 10, 26, 42, 58, 74, 90],
    &[106, 122, 138, 154, 170, 186, 202, 218, 1, 17, 33, 49, 65, 81, 97],
    &[113, 129, 145, 161, 177, 193, 209, 225, 8, 24, 40, 56, 72, 88],
    &[104, 120, 136, 152, 168, 184, 200, 216, 232, 15, 31, 47, 63, 79, 95],
    &[111, 127, 143, 159, 175, 191, 207, 223, 6, 22, 38, 54, 70, 86],
    &[102, 118, 134, 150, 166, 182, 198, 214, 230, 13, 29, 45, 61, 77, 93],
    &[109, 125, 141, 157, 173, 189, 205, 221, 4, 20, 36, 52, 68, 84],
    &[100, 116, 132, 148, 164, 180, 196, 212, 228, 11, 27, 43, 59, 75, 91],
    &[107, 123, 139, 155, 171, 187, 203, 219, 2, 18, 34, 50, 66, 82],
    &[98, 114, 130, 146, 162, 178, 194, 210, 226, 9, 25, 41, 57, 73, 89],
    &[105, 121, 137, 153, 169, 185, 201, 217, 233, 16, 32, 48, 64, 80, 96],
    &[112, 128, 144, 160, 176, 192, 208, 224, 7, 23, 39, 55, 71, 87],
    &[103, 119, 135, 151, 167, 183, 199, 215, 231, 14, 30, 46, 62, 78, 94],
];

const LANDSAT_9_SLOTS: [&[u32]; CYCLE_SLOTS] = [
    &[102, 118, 134, 150, 166, 182, 198, 214, 230, 13, 29, 45, 61, 77, 93],
    &[93, 109, 125, 141, 157, 173, 189, 205, 221, 4, 20, 36, 52, 68, 84],
    &[100, 116, 132, 148, 164, 180, 196, 212, 228, 11, 27, 43, 59, 75, 91],
    &[91, 107, 123, 139, 155, 171, 187, 203, 219, 2, 18, 34, 50, 66, 82],
    &[98, 114, 130, 146, 162, 178, 194, 210, 226, 9, 25, 41, 57, 73, 89],
    &[105, 121, 137, 153, 169, 185, 201, 217, 233, 16, 32, 48, 64, 80, 96],
    &[96, 112, 128, 144, 160, 176, 192, 208, 224, 7, 23, 39, 55, 71, 87],
    &[103, 119, 135, 151, 167, 183, 199, 215, 231, 14, 30, 46, 62, 78, 94],
    &[94, 110, 126, 142, 158, 174, 190, 206, 222, 5, 21, 37, 53, 69, 85],
    &[101, 117, 133, 149, 165, 181, 197, 213, 229, 12, 28, 44, 60, 76, 92],
    &[92, 108, 124, 140, 156, 172, 188, 204, 220, 3, 19, 35, 51, 67, 83],
    &[99, 115, 131, 147, 163, 179, 195, 211, 227, 10, 26, 42, 58, 74, 90],
    &[90, 106, 122, 138, 154, 170, 186, 202, 218, 1, 17, 33, 49, 65, 81],
    &[97, 113, 129, 145, 161, 177, 193, 209, 225, 8, 24, 40, 56, 72, 88],
    &[104, 120, 136, 152, 168, 184, 200, 216, 232, 15, 31, 47, 63, 79, 95],
    &[111, 127, 143, 159, 175, 191, 207, 223, 6, 22, 38, 54, 70, 86, 95],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Satellite {
    Landsat8,
    Landsat9,
}

impl Satellite {
    pub const ALL: [Satellite; 2] = [Satellite::Landsat8, Satellite::Landsat9];

    fn slots(&self) -> &'static [&'static [u32]; CYCLE_SLOTS] {
        match self {
            Satellite::Landsat8 => &LANDSAT_8_SLOTS,
            Satellite::Landsat9 => &LANDSAT_9_SLOTS,
        }
    }
}

/// Reverse index of the slot tables: path number to 1-based cycle day.
#[derive(Debug, Clone)]
pub struct SlotTables {
    slots: HashMap<Satellite, HashMap<u32, u32>>,
}

impl SlotTables {
    /// Build the index. A path listed under more than one day keeps the
    /// earliest day.
    pub fn new() -> Self {
        let mut slots = HashMap::new();
        for satellite in Satellite::ALL {
            let mut index = HashMap::new();
            for (day, paths) in satellite.slots().iter().enumerate() {
                let day = day as u32 + 1;
                for &path in paths.iter() {
                    if let Some(first) = index.get(&path) {
                        log::debug!(
                            "{:?} path {} listed on day {} and day {}, keeping day {}",
                            satellite,
                            path,
                            first,
                            day,
                            first
                        );
                        continue;
                    }
                    index.insert(path, day);
                }
            }
            slots.insert(satellite, index);
        }
        Self { slots }
    }

    /// Day of the cycle (1..=16) on which `satellite` images `path`.
    pub fn slot(&self, satellite: Satellite, path: u32) -> Option<u32> {
        self.slots.get(&satellite)?.get(&path).copied()
    }
}

impl Default for SlotTables {
    fn default() -> Self {
        Self::new()
    }
}
