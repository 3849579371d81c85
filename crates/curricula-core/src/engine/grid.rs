//! Placement grid: structural mutations over a plan's course list.
//!
//! Every operation here is synchronous and total. Destination validity
//! (semester range, free slot, empty trailing semester) is the caller's
//! responsibility; the [`crate::Planner`] checks those before calling in.

use crate::{
    catalog::CatalogCourse,
    models::{Course, CourseId, Plan, SpecialCategory},
};

impl Plan {
    /// Lowest position not occupied in `semester`: the first gap when
    /// scanning the semester's courses by position from 0, otherwise one
    /// past the highest position.
    pub fn next_free_position(&self, semester: u32) -> u32 {
        let mut next = 0;
        for course in self.courses_in_semester(semester) {
            if course.position > next {
                break;
            }
            next = course.position + 1;
        }
        next
    }

    /// True when some course other than `except` sits at the slot.
    pub fn is_slot_taken(&self, semester: u32, position: u32, except: Option<CourseId>) -> bool {
        self.courses
            .iter()
            .any(|c| c.semester == semester && c.position == position && Some(c.id) != except)
    }

    /// True when no course occupies `semester`.
    pub fn is_semester_empty(&self, semester: u32) -> bool {
        !self.courses.iter().any(|c| c.semester == semester)
    }

    /// Appends a course. The caller picks its semester and position,
    /// normally via [`Plan::next_free_position`].
    pub fn add_course(&mut self, course: Course) -> CourseId {
        let id = course.id;
        self.courses.push(course);
        id
    }

    /// Rewrites the semester and position of exactly one course. Returns
    /// false if no course has the id.
    pub fn move_course(&mut self, id: CourseId, semester: u32, position: u32) -> bool {
        match self.course_mut(id) {
            Some(course) => {
                course.semester = semester;
                course.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes exactly one course. Sibling positions are left as they are.
    pub fn delete_course(&mut self, id: CourseId) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.id == id)?;
        Some(self.courses.remove(index))
    }

    /// Replaces the stored course carrying the same id. Returns false if no
    /// course has the id.
    pub fn update_course(&mut self, course: Course) -> bool {
        match self.course_mut(course.id) {
            Some(existing) => {
                *existing = course;
                true
            }
            None => false,
        }
    }

    /// Swaps a placeholder for a new course built from `entry` at the same
    /// semester and position. Fills of open-category placeholders are
    /// recorded in the special bucket. Returns the new course's id, or
    /// `None` if the placeholder does not exist.
    pub fn replace_placeholder(&mut self, placeholder: CourseId, entry: &CatalogCourse) -> Option<CourseId> {
        let old = self.delete_course(placeholder)?;
        let id = self.allocate_id();
        self.add_course(Course::from_catalog(id, entry, old.semester, old.position));
        if let Ok(category) = old.code.parse::<SpecialCategory>() {
            self.special.get_mut(category).push(id);
        }
        Some(id)
    }

    /// Appends an empty semester to the axis.
    pub fn add_semester(&mut self) {
        self.sems += 1;
    }

    /// Drops the last semester. Callers only do this when it holds no
    /// courses.
    pub fn remove_semester(&mut self) {
        self.sems = self.sems.saturating_sub(1);
    }
}
