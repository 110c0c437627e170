use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use permea_core::{Function, FunctionSpace, TestFunction};

/// The solver-owned objects attached to a species once the problem is
/// discretized. All are unset until the solver fills them in.
#[derive(Debug, Clone, Default)]
pub struct SolverSlots {
    /// The solution at the current step.
    pub solution: Option<Function>,
    /// The solution at the previous step.
    pub prev_solution: Option<Function>,
    pub test_function: Option<TestFunction>,
    /// The species' subspace of the mixed function space.
    pub sub_function_space: Option<FunctionSpace>,
    /// The collapsed subspace; `None` for single-species problems.
    pub collapsed_function_space: Option<FunctionSpace>,
    pub post_processing_solution: Option<Function>,
}

/// A hydrogen species in a transport model.
///
/// A `Species` is a shared handle: clones refer to the same species, and
/// equality is identity rather than name. The solver binds its
/// [`SolverSlots`] after discretization and rebinds them every step.
///
/// # Example
///
/// ```
/// use permea_transport::Species;
///
/// let h = Species::new("H");
/// assert_eq!(h.name(), Some("H"));
/// assert!(h.is_mobile());
/// assert!(h.concentration().is_none());
///
/// assert_ne!(h, Species::new("H"));
/// assert_eq!(h, h.clone());
/// ```
#[derive(Clone)]
pub struct Species(Rc<SpeciesInner>);

struct SpeciesInner {
    name: Option<String>,
    mobile: bool,
    slots: RefCell<SolverSlots>,
}

impl Species {
    /// Creates a mobile species.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_mobility(Some(name.into()), true)
    }

    /// Creates an immobile species.
    #[must_use]
    pub fn immobile(name: impl Into<String>) -> Self {
        Self::with_mobility(Some(name.into()), false)
    }

    /// Creates a species with an optional name.
    #[must_use]
    pub fn with_mobility(name: Option<String>, mobile: bool) -> Self {
        Self(Rc::new(SpeciesInner {
            name,
            mobile,
            slots: RefCell::new(SolverSlots::default()),
        }))
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.0.mobile
    }

    /// Borrows the solver slots.
    ///
    /// # Panics
    ///
    /// Panics if the slots are currently borrowed mutably.
    #[must_use]
    pub fn slots(&self) -> Ref<'_, SolverSlots> {
        self.0.slots.borrow()
    }

    /// Mutably borrows the solver slots.
    ///
    /// # Panics
    ///
    /// Panics if the slots are currently borrowed.
    #[must_use]
    pub fn slots_mut(&self) -> RefMut<'_, SolverSlots> {
        self.0.slots.borrow_mut()
    }

    /// Returns the solution at the current step, if bound.
    #[must_use]
    pub fn solution(&self) -> Option<Function> {
        self.slots().solution.clone()
    }

    pub fn set_solution(&self, solution: Function) {
        self.slots_mut().solution = Some(solution);
    }

    /// Returns the solution at the previous step, if bound.
    #[must_use]
    pub fn prev_solution(&self) -> Option<Function> {
        self.slots().prev_solution.clone()
    }

    pub fn set_prev_solution(&self, prev_solution: Function) {
        self.slots_mut().prev_solution = Some(prev_solution);
    }

    /// The concentration of the species: its current solution.
    ///
    /// `None` until the solver binds a solution.
    #[must_use]
    pub fn concentration(&self) -> Option<Function> {
        self.solution()
    }
}

impl PartialEq for Species {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Species {}

impl fmt::Debug for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Species({self})")
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("None"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobility() {
        assert!(Species::new("H").is_mobile());
        assert!(!Species::immobile("trapped").is_mobile());
        assert!(Species::with_mobility(None, true).name().is_none());
    }

    #[test]
    fn slots_start_empty() {
        let h = Species::new("H");
        let slots = h.slots();
        assert!(slots.solution.is_none());
        assert!(slots.prev_solution.is_none());
        assert!(slots.test_function.is_none());
        assert!(slots.sub_function_space.is_none());
        assert!(slots.collapsed_function_space.is_none());
        assert!(slots.post_processing_solution.is_none());
    }

    #[test]
    fn concentration_is_the_bound_solution() {
        let h = Species::new("H");
        let u = Function::new("u", FunctionSpace::new("P1", 1));

        h.set_solution(u.clone());
        let concentration = h.concentration().expect("solution was bound");
        assert!(concentration.ptr_eq(&u));
    }

    #[test]
    fn solutions_can_be_swapped_between_steps() {
        let h = Species::new("H");
        let space = FunctionSpace::new("P1", 1);
        let current = Function::new("u", space.clone());
        let previous = Function::new("u_n", space);

        h.set_solution(current.clone());
        h.set_prev_solution(previous.clone());

        {
            let mut slots = h.slots_mut();
            let SolverSlots {
                solution,
                prev_solution,
                ..
            } = &mut *slots;
            std::mem::swap(solution, prev_solution);
        }

        assert!(h.solution().unwrap().ptr_eq(&previous));
        assert!(h.prev_solution().unwrap().ptr_eq(&current));
    }

    #[test]
    fn display_falls_back_for_unnamed_species() {
        assert_eq!(Species::new("D").to_string(), "D");
        assert_eq!(Species::with_mobility(None, false).to_string(), "None");
        assert_eq!(format!("{:?}", Species::new("T")), "Species(T)");
    }
}
