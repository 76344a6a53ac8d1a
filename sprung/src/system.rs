use crate::{
    error::{Error, IdKind, Result},
    vector::{Distance, Norm, Zero},
};

/// Identifier of a [`Part`] inside a [`System`].
///
/// Identifiers are dense, zero-based and assigned in creation order. They are never reused.
pub type PartId = u32;

/// Identifier of a [`Link`] inside a [`System`].
///
/// Identifiers are dense, zero-based and assigned in creation order. They are never reused.
pub type LinkId = u32;

/// A point mass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Part<V, S> {
    /// Current location of the part.
    pub position: V,
    /// Current rate of change of the position.
    pub velocity: V,
    /// Mass of the part. Not used by the force law, reserved for integration.
    pub mass: S,
}

impl<V, S> Part<V, S> {
    /// Creates a new [`Part`] with the given position, velocity and mass.
    #[inline]
    pub const fn new(position: V, velocity: V, mass: S) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// Creates a new [`Part`] at rest at the given position with a mass of `1`.
    #[inline]
    pub fn at(position: V) -> Self
    where
        V: Zero,
        S: From<f32>,
    {
        Self::new(position, V::zero(), S::from(1.0))
    }
}

/// Physical constants of a damped spring.
///
/// The default constants are `0.5` for both the stiffness and the damping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConstants<S> {
    /// Spring constant `k`, ruling the magnitude of the restoring force.
    pub stiffness: S,
    /// Damping coefficient `c`, ruling the magnitude of the velocity-dependent force.
    pub damping: S,
}

impl<S> SpringConstants<S> {
    /// Creates new [`SpringConstants`].
    #[inline]
    pub const fn new(stiffness: S, damping: S) -> Self {
        Self { stiffness, damping }
    }
}

impl<S: From<f32>> Default for SpringConstants<S> {
    #[inline]
    fn default() -> Self {
        Self::new(S::from(0.5), S::from(0.5))
    }
}

/// A damped spring between two [`Parts`](Part).
///
/// The endpoints of a link cannot be changed once it is created, but its physical constants are
/// plain fields.
///
/// The order of the endpoints matters for the sign of the computed forces: the separation used by
/// the force law goes from part `j` to part `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link<S> {
    i: PartId,
    j: PartId,
    /// Spring constant `k`.
    pub stiffness: S,
    /// Damping coefficient `c`.
    pub damping: S,
    /// Natural length `l` of the spring.
    pub rest_length: S,
}

impl<S> Link<S> {
    #[inline]
    fn new(i: PartId, j: PartId, rest_length: S, constants: SpringConstants<S>) -> Self {
        Self {
            i,
            j,
            stiffness: constants.stiffness,
            damping: constants.damping,
            rest_length,
        }
    }

    /// Returns the first endpoint of the link.
    #[inline]
    pub const fn i(&self) -> PartId {
        self.i
    }

    /// Returns the second endpoint of the link.
    #[inline]
    pub const fn j(&self) -> PartId {
        self.j
    }

    /// Returns both endpoints of the link.
    #[inline]
    pub const fn endpoints(&self) -> (PartId, PartId) {
        (self.i, self.j)
    }
}

/// Storage of the [`Parts`](Part) of a simulation and the [`Links`](Link) between them.
///
/// Parts and links are only ever appended: identifiers stay valid for the lifetime of the
/// system. The system has no internal locking; creating parts or links while forces are computed
/// from another thread requires external synchronisation.
///
/// ```
/// # use sprung::prelude::*;
/// # use glam::Vec3;
/// let mut system = System::<Vec3, f32>::new();
///
/// let a = system.create_part(Vec3::new(1.0, 0.0, 0.0));
/// let b = system.create_part(Vec3::new(-1.0, 0.0, 0.0));
/// let link = system.create_link(a, b)?;
///
/// assert_eq!(system.part_count(), 2);
/// assert_eq!(system.link(link)?.rest_length, 2.0);
/// # Ok::<(), sprung::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct System<V, S> {
    parts: Vec<Part<V, S>>,
    links: Vec<Link<S>>,
    constants: SpringConstants<S>,
}

impl<V, S> Default for System<V, S>
where
    SpringConstants<S>: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_constants(SpringConstants::default())
    }
}

impl<V, S> System<V, S> {
    /// Creates a new empty [`System`] using the default [`SpringConstants`] for new links.
    #[inline]
    pub fn new() -> Self
    where
        SpringConstants<S>: Default,
    {
        Self::default()
    }

    /// Creates a new empty [`System`] using the given [`SpringConstants`] for new links.
    #[inline]
    pub const fn with_constants(constants: SpringConstants<S>) -> Self {
        Self {
            parts: Vec::new(),
            links: Vec::new(),
            constants,
        }
    }

    /// Creates a new empty [`System`] with room for the given number of parts and links.
    #[inline]
    pub fn with_capacity(parts: usize, links: usize) -> Self
    where
        SpringConstants<S>: Default,
    {
        Self {
            parts: Vec::with_capacity(parts),
            links: Vec::with_capacity(links),
            constants: SpringConstants::default(),
        }
    }

    /// Returns the constants given to links created without explicit constants.
    #[inline]
    pub const fn constants(&self) -> &SpringConstants<S> {
        &self.constants
    }

    /// Returns the number of parts.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns the number of links.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Returns the parts, indexed by [`PartId`].
    #[inline]
    pub fn parts(&self) -> &[Part<V, S>] {
        &self.parts
    }

    /// Returns the parts mutably, indexed by [`PartId`].
    ///
    /// This is how an integration step updates positions and velocities.
    #[inline]
    pub fn parts_mut(&mut self) -> &mut [Part<V, S>] {
        &mut self.parts
    }

    /// Returns the links, indexed by [`LinkId`].
    #[inline]
    pub fn links(&self) -> &[Link<S>] {
        &self.links
    }

    /// Returns the part with the given identifier.
    #[inline]
    pub fn part(&self, id: PartId) -> Result<&Part<V, S>> {
        let len = self.parts.len();
        self.parts.get(id as usize).ok_or(Error::IndexOutOfRange {
            kind: IdKind::Part,
            index: id,
            len,
        })
    }

    /// Returns the part with the given identifier mutably.
    #[inline]
    pub fn part_mut(&mut self, id: PartId) -> Result<&mut Part<V, S>> {
        let len = self.parts.len();
        self.parts.get_mut(id as usize).ok_or(Error::IndexOutOfRange {
            kind: IdKind::Part,
            index: id,
            len,
        })
    }

    /// Returns the link with the given identifier.
    #[inline]
    pub fn link(&self, id: LinkId) -> Result<&Link<S>> {
        let len = self.links.len();
        self.links.get(id as usize).ok_or(Error::IndexOutOfRange {
            kind: IdKind::Link,
            index: id,
            len,
        })
    }

    /// Returns the link with the given identifier mutably.
    #[inline]
    pub fn link_mut(&mut self, id: LinkId) -> Result<&mut Link<S>> {
        let len = self.links.len();
        self.links.get_mut(id as usize).ok_or(Error::IndexOutOfRange {
            kind: IdKind::Link,
            index: id,
            len,
        })
    }

    /// Adds a part at rest at the given position, with a mass of `1`, and returns its identifier.
    ///
    /// # Panics
    ///
    /// Panics if the system already holds `PartId::MAX` parts.
    #[inline]
    pub fn create_part(&mut self, position: V) -> PartId
    where
        V: Zero,
        S: From<f32>,
    {
        self.push_part(Part::at(position))
    }

    /// Adds a part with the given position, velocity and mass and returns its identifier.
    ///
    /// # Panics
    ///
    /// Panics if the system already holds `PartId::MAX` parts.
    #[inline]
    pub fn create_part_with(&mut self, position: V, velocity: V, mass: S) -> PartId {
        self.push_part(Part::new(position, velocity, mass))
    }

    #[inline]
    fn push_part(&mut self, part: Part<V, S>) -> PartId {
        assert!(
            self.parts.len() < PartId::MAX as usize,
            "the system cannot hold more than {} parts",
            PartId::MAX
        );

        let id = self.parts.len() as PartId;
        self.parts.push(part);
        log::trace!("created part {id}");

        id
    }

    /// Adds a link between parts `i` and `j` whose rest length is the current distance between
    /// them, using the constants of the system.
    ///
    /// Returns [`Error::InvalidReference`] if either part does not exist and [`Error::SelfLink`]
    /// if `i == j`.
    #[inline]
    pub fn create_link(&mut self, i: PartId, j: PartId) -> Result<LinkId>
    where
        V: Norm<Output = S> + std::ops::Sub<Output = V> + Clone,
        S: Clone,
    {
        self.create_link_with(i, j, None, self.constants.clone())
    }

    /// Adds a link between parts `i` and `j` with the given rest length, using the constants of
    /// the system.
    ///
    /// Returns [`Error::InvalidReference`] if either part does not exist and [`Error::SelfLink`]
    /// if `i == j`.
    #[inline]
    pub fn create_link_with_rest_length(
        &mut self,
        i: PartId,
        j: PartId,
        rest_length: S,
    ) -> Result<LinkId>
    where
        V: Norm<Output = S> + std::ops::Sub<Output = V> + Clone,
        S: Clone,
    {
        self.create_link_with(i, j, Some(rest_length), self.constants.clone())
    }

    /// Adds a link between parts `i` and `j` with the given constants.
    ///
    /// If `rest_length` is `None`, the current distance between the two parts is used.
    ///
    /// Returns [`Error::InvalidReference`] if either part does not exist and [`Error::SelfLink`]
    /// if `i == j`. The links are left untouched on error.
    ///
    /// ```
    /// # use sprung::prelude::*;
    /// # use glam::Vec2;
    /// let mut system = System::<Vec2, f32>::new();
    /// let a = system.create_part(Vec2::ZERO);
    /// let b = system.create_part(Vec2::X);
    ///
    /// let stiff = SpringConstants::new(10.0, 0.1);
    /// let link = system.create_link_with(a, b, Some(0.5), stiff)?;
    ///
    /// assert_eq!(system.link(link)?.stiffness, 10.0);
    /// assert_eq!(system.link(link)?.rest_length, 0.5);
    /// assert_eq!(
    ///     system.create_link_with(a, 7, None, stiff),
    ///     Err(Error::InvalidReference { part: 7, part_count: 2 })
    /// );
    /// # Ok::<(), sprung::Error>(())
    /// ```
    pub fn create_link_with(
        &mut self,
        i: PartId,
        j: PartId,
        rest_length: Option<S>,
        constants: SpringConstants<S>,
    ) -> Result<LinkId>
    where
        V: Norm<Output = S> + std::ops::Sub<Output = V> + Clone,
    {
        if let Err(error) = self.validate_endpoints(i, j) {
            log::debug!("rejected link between parts {i} and {j}: {error}");
            return Err(error);
        }

        let Ok(id) = LinkId::try_from(self.links.len()) else {
            return Err(Error::LinkCapacityExceeded);
        };

        let rest_length = match rest_length {
            Some(rest_length) => rest_length,
            None => {
                let position_i = self.parts[i as usize].position.clone();
                let position_j = self.parts[j as usize].position.clone();
                position_i.distance(position_j)
            }
        };

        self.links.push(Link::new(i, j, rest_length, constants));
        log::trace!("created link {id} between parts {i} and {j}");

        Ok(id)
    }

    #[inline]
    fn validate_endpoints(&self, i: PartId, j: PartId) -> Result<()> {
        let part_count = self.parts.len();

        for part in [i, j] {
            if part as usize >= part_count {
                return Err(Error::InvalidReference { part, part_count });
            }
        }

        if i == j {
            return Err(Error::SelfLink { part: i });
        }

        Ok(())
    }

    /// Checks that no link has coincident endpoints.
    ///
    /// Returns [`Error::DegenerateGeometry`] for the first such link. The spring-damper law is
    /// undefined for these links.
    pub fn check_geometry(&self) -> Result<()>
    where
        V: Norm<Output = S> + std::ops::Sub<Output = V> + Clone,
        S: Default + PartialEq,
    {
        for (id, link) in self.links.iter().enumerate() {
            let position_i = self.parts[link.i as usize].position.clone();
            let position_j = self.parts[link.j as usize].position.clone();

            if position_i.distance_squared(position_j) == S::default() {
                log::warn!(
                    "link {id} has coincident endpoints {} and {}",
                    link.i,
                    link.j
                );

                return Err(Error::DegenerateGeometry {
                    link: id as LinkId,
                    i: link.i,
                    j: link.j,
                });
            }
        }

        Ok(())
    }
}
