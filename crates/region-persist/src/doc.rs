//! On-disk document layout.

use region_domain::{DefaultDomain, Flags, Region, RegionData};
use region_geom::{BlockPos, Column, Cuboid, Geometry, Polygonal};
use serde::{Deserialize, Serialize};

use crate::{PersistError, PersistResult};

/// Current document version.
pub const VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct RegionFile {
    pub version: u32,
    pub regions: Vec<RegionDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegionDoc {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub cache: bool,
    pub geometry: GeometryDoc,
    #[serde(default)]
    pub owners: DefaultDomain,
    #[serde(default)]
    pub members: DefaultDomain,
    #[serde(default)]
    pub flags: Flags,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeometryDoc {
    Cuboid {
        min: [i32; 3],
        max: [i32; 3],
    },
    Polygonal {
        points: Vec<[i32; 2]>,
        min_y: i32,
        max_y: i32,
    },
}

impl From<&Geometry> for GeometryDoc {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Cuboid(c) => Self::Cuboid {
                min: [c.min().x, c.min().y, c.min().z],
                max: [c.max().x, c.max().y, c.max().z],
            },
            Geometry::Polygonal(p) => Self::Polygonal {
                points: p.points().iter().map(|c| [c.x, c.z]).collect(),
                min_y: p.min_y(),
                max_y: p.max_y(),
            },
        }
    }
}

impl RegionDoc {
    pub fn from_region(region: &Region) -> Self {
        let data = region.payload();
        Self {
            id: region.name().to_owned(),
            parent: region.parent().map(str::to_owned),
            cache: region.should_cache(),
            geometry: region.geometry().into(),
            owners: data.owners.read().clone(),
            members: data.members.read().clone(),
            flags: data.flags.read().clone(),
        }
    }

    pub fn into_region(self) -> PersistResult<Region> {
        let geometry: Geometry = match self.geometry {
            GeometryDoc::Cuboid { min, max } => Cuboid::new(
                BlockPos::new(min[0], min[1], min[2]),
                BlockPos::new(max[0], max[1], max[2]),
            )
            .into(),
            GeometryDoc::Polygonal {
                points,
                min_y,
                max_y,
            } => {
                let points = points.into_iter().map(|[x, z]| Column::new(x, z)).collect();
                Polygonal::new(points, min_y, max_y)
                    .map_err(|source| PersistError::Geometry {
                        id: self.id.clone(),
                        source,
                    })?
                    .into()
            }
        };

        let data = RegionData::new(self.owners, self.members, self.flags);
        let mut region = Region::new(&self.id, geometry, data)?.cached(self.cache);
        if let Some(parent) = self.parent {
            region = region.with_parent(parent);
        }
        Ok(region)
    }
}
